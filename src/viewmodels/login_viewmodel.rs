// ============================================================================
// LOGIN VIEWMODEL - Login form state
// ============================================================================

use crate::error::ApiError;

#[derive(Clone, Debug, Default)]
pub struct LoginViewModel {
    pub username: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// Credentials to send, or `None` when the form is incomplete or busy
    pub fn begin_submit(&mut self) -> Option<(String, String)> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some((self.username.trim().to_string(), self.password.clone()))
    }

    pub fn finish(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.password.clear();
                self.error = None;
            }
            Err(e) => {
                log::warn!("⚠️ [LOGIN] {}", e);
                self.error = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LoginViewModel {
        LoginViewModel {
            username: " dave ".into(),
            password: "secret".into(),
            ..LoginViewModel::default()
        }
    }

    #[test]
    fn incomplete_form_cannot_submit() {
        let mut vm = LoginViewModel::new();
        vm.username = "dave".into();
        assert_eq!(vm.begin_submit(), None);
    }

    #[test]
    fn submit_trims_username_and_blocks_resubmit() {
        let mut vm = filled();
        assert_eq!(vm.begin_submit(), Some(("dave".to_string(), "secret".to_string())));
        assert!(vm.is_submitting());
        assert_eq!(vm.begin_submit(), None);
    }

    #[test]
    fn failure_shows_login_failed() {
        let mut vm = filled();
        vm.begin_submit();
        vm.finish(Err(ApiError::Authentication(401)));
        assert_eq!(vm.error(), Some("Login failed"));
        assert!(!vm.is_submitting());
        assert_eq!(vm.password, "secret");
    }

    #[test]
    fn success_clears_password() {
        let mut vm = filled();
        vm.begin_submit();
        vm.finish(Ok(()));
        assert!(vm.password.is_empty());
        assert!(vm.error().is_none());
    }
}
