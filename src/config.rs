use serde::{Deserialize, Serialize};

const DEFAULT_API_URL_DEVELOPMENT: &str = "http://127.0.0.1:8000";
const DEFAULT_API_URL_PRODUCTION: &str = "https://api.isave.app";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: DEFAULT_API_URL_DEVELOPMENT.to_string(),
            api_url_production: DEFAULT_API_URL_PRODUCTION.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .unwrap_or(DEFAULT_API_URL_DEVELOPMENT)
                .to_string(),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .unwrap_or(DEFAULT_API_URL_PRODUCTION)
                .to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// Backend base URL for the current environment, without a trailing slash
    pub fn api_base_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_environment_selects_production_url() {
        let config = AppConfig {
            api_url_production: "https://receipts.example.com/".to_string(),
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://receipts.example.com");
    }

    #[test]
    fn unknown_environment_falls_back_to_development() {
        let config = AppConfig {
            environment: "staging".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.api_base_url(), DEFAULT_API_URL_DEVELOPMENT);
    }

    #[test]
    fn disabled_logging_only_keeps_warnings() {
        let config = AppConfig {
            enable_logging: false,
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
