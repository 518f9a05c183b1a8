use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::{de_amount, de_string_or_default};
use crate::utils::constants::CHART_COLORS;

/// Per-category spending histogram computed by the backend for one filter window.
/// `labels` and `data` are parallel arrays.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct StatsSummary {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_spent: f64,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub filter: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ChartSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Share of the sum of all slices, 0..=100
    pub percent: f64,
}

impl StatsSummary {
    /// Nothing worth charting
    pub fn is_empty(&self) -> bool {
        self.total_spent == 0.0
    }

    /// Pairs labels with values positionally; surplus entries on either side are dropped
    pub fn slices(&self) -> Vec<ChartSlice> {
        let sum: f64 = self
            .labels
            .iter()
            .zip(self.data.iter())
            .map(|(_, v)| v.max(0.0))
            .sum();

        self.labels
            .iter()
            .zip(self.data.iter())
            .enumerate()
            .map(|(index, (label, value))| ChartSlice {
                label: label.clone(),
                value: *value,
                color: CHART_COLORS[index % CHART_COLORS.len()],
                percent: if sum > 0.0 { value.max(0.0) * 100.0 / sum } else { 0.0 },
            })
            .collect()
    }

    /// CSS `conic-gradient(...)` drawing the slices as a ring
    pub fn conic_gradient(&self) -> String {
        let slices = self.slices();
        if slices.is_empty() {
            return "conic-gradient(rgba(255,255,255,0.1) 0% 100%)".to_string();
        }

        let mut start = 0.0;
        let stops: Vec<String> = slices
            .iter()
            .map(|slice| {
                let end = start + slice.percent;
                let stop = format!("{} {:.2}% {:.2}%", slice.color, start, end);
                start = end;
                stop
            })
            .collect();
        format!("conic-gradient({})", stops.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary() -> StatsSummary {
        serde_json::from_value(json!({
            "labels": ["food", "transport", "utilities", "shopping", "health", "general"],
            "data": [30.0, 10.0, 20.0, 15.0, 5.0, 20.0],
            "total_spent": "100.00",
            "filter": "month=2026-01"
        }))
        .unwrap()
    }

    #[test]
    fn slices_cycle_through_the_palette() {
        let slices = summary().slices();
        assert_eq!(slices.len(), 6);
        assert_eq!(slices[0].color, CHART_COLORS[0]);
        assert_eq!(slices[5].color, CHART_COLORS[0]);
        assert_eq!(slices[0].percent, 30.0);
    }

    #[test]
    fn mismatched_arrays_pair_positionally() {
        let stats = StatsSummary {
            labels: vec!["food".into(), "transport".into(), "health".into()],
            data: vec![4.0, 6.0],
            total_spent: 10.0,
            filter: String::new(),
        };
        let slices = stats.slices();
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[1].label, "transport");
        assert_eq!(slices[1].percent, 60.0);
    }

    #[test]
    fn zero_spend_is_empty() {
        let stats: StatsSummary =
            serde_json::from_value(json!({ "labels": [], "data": [], "total_spent": 0 })).unwrap();
        assert!(stats.is_empty());
        assert!(stats.conic_gradient().contains("0% 100%"));
    }

    #[test]
    fn gradient_stops_are_contiguous() {
        let stats = StatsSummary {
            labels: vec!["food".into(), "transport".into()],
            data: vec![25.0, 75.0],
            total_spent: 100.0,
            filter: String::new(),
        };
        assert_eq!(
            stats.conic_gradient(),
            "conic-gradient(#8884d8 0.00% 25.00%, #ff8042 25.00% 100.00%)"
        );
    }
}
