// localStorage keys. Sign-out clears the whole store, theme included.
pub const ACCESS_TOKEN_KEY: &str = "access";
pub const REFRESH_TOKEN_KEY: &str = "refresh";
pub const USERNAME_KEY: &str = "username";
pub const IS_STAFF_KEY: &str = "is_staff";
pub const THEME_KEY: &str = "theme";

// Backend endpoints, relative to `CONFIG.api_base_url()`
pub const LOGIN_PATH: &str = "/api/login/";
pub const RECEIPTS_PATH: &str = "/api/receipts/";
pub const SCAN_PATH: &str = "/api/receipts/scan/";
pub const STATS_PATH: &str = "/api/receipts/stats/";
pub const EXPORT_PATH: &str = "/api/receipts/export/";

/// Multipart field carrying the receipt image
pub const SCAN_FILE_FIELD: &str = "file";

pub const EXPORT_FILENAME_PREFIX: &str = "selected_expenses_";

/// Donut chart palette, cycled per category
pub const CHART_COLORS: [&str; 5] = ["#8884d8", "#ff8042", "#00C49F", "#FFBB28", "#ff4d4d"];

pub const APP_NAME: &str = "iSave";
