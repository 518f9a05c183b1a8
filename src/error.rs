// ============================================================================
// ERRORS - API and storage error taxonomy
// ============================================================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Login failed (HTTP {0})")]
    Authentication(u16),

    #[error("Login response did not include an access token")]
    MissingToken,

    #[error("{0}")]
    Request(String),

    #[error("Scan failed (HTTP {0})")]
    Scan(u16),

    #[error("Save failed (HTTP {0})")]
    Save(u16),

    #[error("Delete failed (HTTP {0})")]
    Delete(u16),

    #[error("Export failed (HTTP {0})")]
    Export(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Message shown to the user, independent of the diagnostic `Display`
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Authentication(_) | ApiError::MissingToken => "Login failed".to_string(),
            ApiError::Request(message) => message.clone(),
            ApiError::Scan(_) => "Failed to scan receipt.".to_string(),
            ApiError::Save(_) => "Failed to save receipt. Try again.".to_string(),
            ApiError::Delete(_) => "Failed to delete receipt.".to_string(),
            ApiError::Export(_) => "Export failed.".to_string(),
            ApiError::Network(_) => "Could not reach the server.".to_string(),
            ApiError::Parse(_) | ApiError::Serialization(_) => {
                "Unexpected response from the server.".to_string()
            }
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("Could not write key '{0}'")]
    Write(String),

    #[error("Could not remove key '{0}'")]
    Remove(String),

    #[error("Could not clear storage")]
    Clear,
}
