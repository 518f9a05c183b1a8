use chrono::{Datelike, NaiveDate};

use crate::models::RecordFilter;

/// Hash routes (`#/today`, ...)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    Dashboard,
    Today,
    Day,
    Month,
    Year,
    Period,
}

impl Route {
    /// Order of the navigation bar
    pub const NAV: [Route; 6] = [
        Route::Dashboard,
        Route::Today,
        Route::Day,
        Route::Month,
        Route::Year,
        Route::Period,
    ];

    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_matches('/');
        match path {
            "login" => Route::Login,
            "today" => Route::Today,
            "day" => Route::Day,
            "month" => Route::Month,
            "year" => Route::Year,
            "period" => Route::Period,
            _ => Route::Dashboard,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Route::Login => "#/login",
            Route::Dashboard => "#/dashboard",
            Route::Today => "#/today",
            Route::Day => "#/day",
            Route::Month => "#/month",
            Route::Year => "#/year",
            Route::Period => "#/period",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Today => "Today",
            Route::Day => "Day",
            Route::Month => "Month",
            Route::Year => "Year",
            Route::Period => "Period",
        }
    }

    /// Heading of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Today => "Today's Expenses",
            Route::Day => "Daily Expenses",
            Route::Month => "Monthly Expenses",
            Route::Year => "Yearly Expenses",
            Route::Period => "Expenses by Period",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Login => "🔐",
            Route::Dashboard => "🏠",
            Route::Today | Route::Day => "📅",
            Route::Month => "📆",
            Route::Year => "🗓️",
            Route::Period => "⏳",
        }
    }

    /// Redirects anonymous users to login and logged-in users away from it
    pub fn guard(self, authenticated: bool) -> Route {
        match (self, authenticated) {
            (_, false) => Route::Login,
            (Route::Login, true) => Route::Dashboard,
            (route, true) => route,
        }
    }

    /// Filter a record screen opens with
    pub fn default_filter(&self, today: NaiveDate) -> RecordFilter {
        match self {
            Route::Login | Route::Dashboard => RecordFilter::All,
            Route::Today => RecordFilter::Today,
            Route::Day => RecordFilter::Date(today),
            Route::Month => RecordFilter::month_of(today),
            Route::Year => RecordFilter::Year(today.year()),
            Route::Period => RecordFilter::Range { start: today, end: today },
        }
    }

    /// Only the dashboard supports selection, delete, export and scanning
    pub fn is_dashboard(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_round_trip() {
        for route in Route::NAV.iter().chain([Route::Login].iter()) {
            assert_eq!(Route::from_hash(route.hash()), *route);
        }
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/users"), Route::Dashboard);
    }

    #[test]
    fn guard_redirects_anonymous_users() {
        assert_eq!(Route::Month.guard(false), Route::Login);
        assert_eq!(Route::Login.guard(true), Route::Dashboard);
        assert_eq!(Route::Period.guard(true), Route::Period);
    }

    #[test]
    fn default_filters_follow_the_screen() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(Route::Dashboard.default_filter(today), RecordFilter::All);
        assert_eq!(Route::Today.default_filter(today).query_string(), "today=true");
        assert_eq!(Route::Day.default_filter(today).query_string(), "date=2026-01-12");
        assert_eq!(Route::Month.default_filter(today).query_string(), "month=2026-01");
        assert_eq!(Route::Year.default_filter(today).query_string(), "year=2026");
        assert_eq!(
            Route::Period.default_filter(today).query_string(),
            "start=2026-01-12&end=2026-01-12"
        );
    }
}
