// ============================================================================
// SESSION STATE - Authenticated session context
// ============================================================================
// Injected into the API client and the views. `hydrate` restores it from the
// persisted store at start-up, `teardown` wipes both memory and storage.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ApiError, StorageError};
use crate::models::{LoginResponse, Session};
use crate::utils::constants::{ACCESS_TOKEN_KEY, IS_STAFF_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY};
use crate::utils::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionState {
    session: Rc<RefCell<Option<Session>>>,
    store: Rc<dyn KeyValueStore>,
}

impl SessionState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            store,
        }
    }

    /// Loads the persisted session, if any. A missing or empty access token
    /// means unauthenticated.
    pub fn hydrate(&self) -> Option<Session> {
        let session = self
            .store
            .get(ACCESS_TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
            .map(|access_token| Session {
                access_token,
                refresh_token: self.store.get(REFRESH_TOKEN_KEY).unwrap_or_default(),
                username: self.store.get(USERNAME_KEY).unwrap_or_default(),
                is_staff: self.store.get(IS_STAFF_KEY).as_deref() == Some("true"),
            });

        match &session {
            Some(s) => log::info!("💾 [SESSION] Restored session for {}", s.username),
            None => log::info!("[SESSION] No stored session"),
        }

        *self.session.borrow_mut() = session.clone();
        session
    }

    /// Replaces the current session with the one granted by a successful login
    pub fn establish(&self, response: &LoginResponse, entered_username: &str) -> Result<Session, ApiError> {
        if response.access.trim().is_empty() {
            return Err(ApiError::MissingToken);
        }

        let session = Session {
            access_token: response.access.clone(),
            refresh_token: response.refresh.clone(),
            username: response.resolved_username(entered_username),
            is_staff: response.is_staff(),
        };

        if let Err(e) = self.persist(&session) {
            // The in-memory session still works for this tab
            log::error!("❌ [SESSION] Could not persist session: {}", e);
        }

        log::info!("✅ [SESSION] Logged in as {}", session.username);
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, IS_STAFF_KEY] {
            self.store.remove(key)?;
        }
        self.store.set(ACCESS_TOKEN_KEY, &session.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &session.refresh_token)?;
        self.store.set(USERNAME_KEY, &session.username)?;
        self.store.set(IS_STAFF_KEY, if session.is_staff { "true" } else { "false" })?;
        Ok(())
    }

    /// Sign-out: drops the session and clears the whole persisted store
    pub fn teardown(&self) -> Result<(), StorageError> {
        log::info!("👋 [SESSION] Signing out");
        *self.session.borrow_mut() = None;
        self.store.clear()
    }

    pub fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.access_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.session.borrow().as_ref().map(|s| s.username.clone())
    }

    pub fn is_staff(&self) -> bool {
        self.session.borrow().as_ref().map(|s| s.is_staff).unwrap_or(false)
    }
}
