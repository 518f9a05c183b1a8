use serde::{Deserialize, Serialize};

/// Authenticated identity held for the lifetime of a browser session
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub username: String,
    pub is_staff: bool,
}

impl Session {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
