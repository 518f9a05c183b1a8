use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::{de_amount, de_string_or_default};

/// Categories the backend accepts for a saved receipt
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Shopping,
    Entertainment,
    Health,
    General,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Shopping,
        Category::Entertainment,
        Category::Health,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Utilities => "utilities",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Transport => "Transportation",
            Self::Utilities => "Utilities",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health & Fitness",
            Self::General => "General",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

/// A scanned receipt awaiting user verification
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ReceiptDraft {
    #[serde(default, alias = "vendor", deserialize_with = "de_string_or_default")]
    pub store_name: String,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub date: String,
    #[serde(default, alias = "total", deserialize_with = "de_amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl ReceiptDraft {
    /// Maps an unrecognised category (the OCR service answers "Uncategorized")
    /// onto one the backend accepts
    pub fn normalized(mut self) -> Self {
        let category = Category::parse(&self.category).unwrap_or_default();
        self.category = category.as_str().to_string();
        self
    }

    pub fn category(&self) -> Category {
        Category::parse(&self.category).unwrap_or_default()
    }
}

/// A persisted receipt as listed by the backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ReceiptRecord {
    pub id: i64,
    #[serde(default, alias = "title", deserialize_with = "de_string_or_default")]
    pub store_name: String,
    #[serde(default, alias = "total", deserialize_with = "de_amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub category: String,
}

impl ReceiptRecord {
    pub fn display_name(&self) -> &str {
        if self.store_name.trim().is_empty() {
            "Unknown Store"
        } else {
            &self.store_name
        }
    }
}

/// The list endpoint answers either a bare array or a paginated envelope
#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(untagged)]
pub enum ReceiptListResponse {
    Bare(Vec<ReceiptRecord>),
    Paged {
        #[serde(default)]
        results: Vec<ReceiptRecord>,
    },
}

impl ReceiptListResponse {
    pub fn into_records(self) -> Vec<ReceiptRecord> {
        match self {
            ReceiptListResponse::Bare(records) => records,
            ReceiptListResponse::Paged { results } => results,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ExportRequest {
    pub ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records() -> serde_json::Value {
        json!([
            { "id": 3, "store_name": "Lidl", "total_amount": "12.50", "date": "2026-01-12", "category": "food" },
            { "id": 7, "store_name": "Shell", "total_amount": 60, "date": "2026-01-11", "category": "transport" }
        ])
    }

    #[test]
    fn bare_and_paged_lists_normalize_identically() {
        let bare: ReceiptListResponse = serde_json::from_value(sample_records()).unwrap();
        let paged: ReceiptListResponse =
            serde_json::from_value(json!({ "count": 2, "results": sample_records() })).unwrap();

        let bare = bare.into_records();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare, paged.into_records());
    }

    #[test]
    fn envelope_without_results_is_an_empty_list() {
        let response: ReceiptListResponse = serde_json::from_value(json!({ "detail": "ok" })).unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn record_accepts_title_and_total_aliases() {
        let record: ReceiptRecord =
            serde_json::from_value(json!({ "id": 1, "title": "Demo receipt", "total": 7.99 })).unwrap();
        assert_eq!(record.store_name, "Demo receipt");
        assert_eq!(record.total_amount, 7.99);
        assert_eq!(record.category, "");
    }

    #[test]
    fn record_tolerates_null_fields_and_extra_keys() {
        let record: ReceiptRecord = serde_json::from_value(json!({
            "id": 9,
            "user": { "id": 1, "username": "alice" },
            "store_name": null,
            "total_amount": null,
            "date": null,
            "category": "general",
            "status": "pending"
        }))
        .unwrap();
        assert_eq!(record.display_name(), "Unknown Store");
        assert_eq!(record.total_amount, 0.0);
        assert_eq!(record.date, "");
    }

    #[test]
    fn scan_payload_with_ocr_keys_becomes_a_draft() {
        let draft: ReceiptDraft = serde_json::from_value(json!({
            "vendor": "Carrefour",
            "date": "2026-01-12",
            "total": "23.40",
            "category": "Uncategorized"
        }))
        .unwrap();
        let draft = draft.normalized();

        assert_eq!(draft.store_name, "Carrefour");
        assert_eq!(draft.total_amount, 23.4);
        assert_eq!(draft.category, "general");
        assert!(draft.items.is_none());
    }

    #[test]
    fn draft_serializes_without_absent_items() {
        let draft = ReceiptDraft {
            store_name: "Lidl".to_string(),
            date: "2026-01-12".to_string(),
            total_amount: 12.5,
            category: "food".to_string(),
            items: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({ "store_name": "Lidl", "date": "2026-01-12", "total_amount": 12.5, "category": "food" })
        );
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse("FOOD"), Some(Category::Food));
        assert_eq!(Category::parse(" health "), Some(Category::Health));
        assert_eq!(Category::parse("Uncategorized"), None);
    }

    #[test]
    fn export_request_carries_ids_in_selection_order() {
        let body = serde_json::to_value(ExportRequest { ids: vec![3, 7] }).unwrap();
        assert_eq!(body, json!({ "ids": [3, 7] }));
    }
}
