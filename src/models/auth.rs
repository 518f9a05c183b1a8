use serde::{Deserialize, Serialize};

use crate::models::serde_helpers::de_string_or_default;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub access: String,
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub refresh: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
}

impl LoginResponse {
    /// Server-echoed username, falling back to what the user typed
    pub fn resolved_username(&self, entered: &str) -> String {
        match &self.user {
            Some(user) if !user.username.is_empty() => user.username.clone(),
            _ => entered.to_string(),
        }
    }

    pub fn is_staff(&self) -> bool {
        self.user.as_ref().map(|u| u.is_staff).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_block_is_optional() {
        let response: LoginResponse =
            serde_json::from_value(json!({ "access": "a.b.c", "refresh": "r.r.r" })).unwrap();
        assert!(response.user.is_none());
        assert_eq!(response.resolved_username("alice"), "alice");
        assert!(!response.is_staff());
    }

    #[test]
    fn echoed_user_wins_over_entered_name() {
        let response: LoginResponse = serde_json::from_value(json!({
            "access": "a.b.c",
            "refresh": "r.r.r",
            "user": { "username": "Alice", "is_staff": true }
        }))
        .unwrap();
        assert_eq!(response.resolved_username("alice"), "Alice");
        assert!(response.is_staff());
    }
}
