// ============================================================================
// SESSION VIEWMODEL - Login / logout
// ============================================================================
// Talks to the API and hands the result to `SessionState`; holds no UI state.
// ============================================================================

use crate::error::ApiError;
use crate::models::Session;
use crate::services::ApiClient;
use crate::state::SessionState;

pub struct SessionViewModel {
    api_client: ApiClient,
    session: SessionState,
}

impl SessionViewModel {
    pub fn new(session: SessionState) -> Self {
        Self {
            api_client: ApiClient::new(session.clone()),
            session,
        }
    }

    /// Authenticates and stores the granted session
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let response = self.api_client.login(username, password).await?;
        self.session.establish(&response, username)
    }

    /// Clears the session and every persisted key
    pub fn logout(&self) {
        if let Err(e) = self.session.teardown() {
            log::error!("❌ [SESSION] Could not clear storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginResponse;
    use crate::utils::constants::THEME_KEY;
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    #[test]
    fn logout_clears_session_and_storage() {
        let store = MemoryStorage::new();
        let session = SessionState::new(Rc::new(store.clone()));
        let response = LoginResponse {
            access: "tok".into(),
            refresh: "ref".into(),
            user: None,
        };
        session.establish(&response, "dave").unwrap();
        store.set(THEME_KEY, "light").unwrap();

        SessionViewModel::new(session.clone()).logout();

        assert!(!session.is_authenticated());
        assert!(store.is_empty());
    }
}
