use chrono::{Datelike, NaiveDate};

use crate::utils::constants::{RECEIPTS_PATH, STATS_PATH};

/// Window of receipt history a record view asks the backend for
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RecordFilter {
    All,
    Today,
    Date(NaiveDate),
    Month { year: i32, month: u32 },
    Year(i32),
    Range { start: NaiveDate, end: NaiveDate },
}

impl RecordFilter {
    pub fn month_of(date: NaiveDate) -> Self {
        RecordFilter::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Query string without the leading `?`; empty for `All`
    pub fn query_string(&self) -> String {
        match self {
            RecordFilter::All => String::new(),
            RecordFilter::Today => "today=true".to_string(),
            RecordFilter::Date(date) => format!("date={}", date.format("%Y-%m-%d")),
            RecordFilter::Month { year, month } => format!("month={:04}-{:02}", year, month),
            RecordFilter::Year(year) => format!("year={:04}", year),
            RecordFilter::Range { start, end } => format!(
                "start={}&end={}",
                start.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            ),
        }
    }

    pub fn list_path(&self) -> String {
        with_query(RECEIPTS_PATH, &self.query_string())
    }

    pub fn stats_path(&self) -> String {
        with_query(STATS_PATH, &self.query_string())
    }

    /// Value for an `<input type="date">` / `type="month"` / year field
    pub fn input_value(&self) -> String {
        match self {
            RecordFilter::All | RecordFilter::Today => String::new(),
            RecordFilter::Date(date) => date.format("%Y-%m-%d").to_string(),
            RecordFilter::Month { year, month } => format!("{:04}-{:02}", year, month),
            RecordFilter::Year(year) => year.to_string(),
            RecordFilter::Range { start, .. } => start.format("%Y-%m-%d").to_string(),
        }
    }

    /// Rebuilds a filter of the same kind from raw form input.
    /// Returns `None` when the input does not parse.
    pub fn with_input(&self, primary: &str, secondary: Option<&str>) -> Option<RecordFilter> {
        match self {
            RecordFilter::All | RecordFilter::Today => Some(*self),
            RecordFilter::Date(_) => parse_date(primary).map(RecordFilter::Date),
            RecordFilter::Month { .. } => parse_month(primary),
            RecordFilter::Year(_) => parse_year(primary).map(RecordFilter::Year),
            RecordFilter::Range { start, end } => {
                let start = parse_date(primary).unwrap_or(*start);
                let end = secondary.and_then(parse_date).unwrap_or(*end);
                Some(RecordFilter::Range { start, end })
            }
        }
    }
}

fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

pub fn parse_month(input: &str) -> Option<RecordFilter> {
    let (year, month) = input.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(RecordFilter::Month { year, month })
}

pub fn parse_year(input: &str) -> Option<i32> {
    let year: i32 = input.trim().parse().ok()?;
    if (1..=9999).contains(&year) {
        Some(year)
    } else {
        None
    }
}
