use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::utils::constants::EXPORT_FILENAME_PREFIX;

/// Today's date in the browser's local timezone
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// `selected_expenses_<YYYY-MM-DD>.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}{}.csv", EXPORT_FILENAME_PREFIX, date.format("%Y-%m-%d"))
}

/// Export filename for the instant `now`, dated in UTC whatever its zone
pub fn export_filename_at<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    export_filename(now.with_timezone(&Utc).date_naive())
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

pub fn format_currency(amount: f64) -> String {
    format!("${}", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn export_filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(export_filename(date), "selected_expenses_2026-01-12.csv");
    }

    #[test]
    fn export_filename_is_dated_in_utc() {
        let late_evening = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 12, 21, 30, 0)
            .unwrap();
        assert_eq!(export_filename_at(&late_evening), "selected_expenses_2026-01-13.csv");

        let early_morning = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 1, 13, 1, 30, 0)
            .unwrap();
        assert_eq!(export_filename_at(&early_morning), "selected_expenses_2026-01-12.csv");
    }

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(format_amount(12.5), "12.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }
}
