//! Mock session handling: a string comparison against the fixture accounts.
//! No hashing, no token, no expiry.

use thiserror::Error;
use tracing::info;

use super::User;

/// Literal password accepted for every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// Errors returned when a login attempt is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the message is the UI string.
    #[error("Email ou mot de passe incorrect")]
    InvalidCredentials,
}

/// Holds the currently authenticated mock user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Compare the email against the given accounts and the demo password.
    ///
    /// On success the matched user becomes the active user and a copy is
    /// returned. On failure the session is left untouched.
    pub fn login(&mut self, users: &[User], email: &str, password: &str) -> Result<User, AuthError> {
        let email = email.trim();
        let user = users.iter().find(|user| user.email == email);
        match user {
            Some(user) if password == DEMO_PASSWORD => {
                info!(email, role = ?user.role, "login accepted");
                self.current = Some(user.clone());
                Ok(user.clone())
            }
            _ => {
                info!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Clear the active user, returning it for logging.
    pub fn logout(&mut self) -> Option<User> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{UserRole, fixtures};

    #[test]
    fn login_with_known_email_and_demo_password_succeeds() {
        let users = fixtures::demo_users();
        let mut session = Session::new();
        let user = session
            .login(&users, "marie@company.com", DEMO_PASSWORD)
            .unwrap();
        assert_eq!(user.role, UserRole::Metadonneur);
        assert!(session.is_authenticated());
    }

    #[test]
    fn login_trims_surrounding_whitespace() {
        let users = fixtures::demo_users();
        let mut session = Session::new();
        assert!(session.login(&users, " jean@company.com ", DEMO_PASSWORD).is_ok());
    }

    #[test]
    fn login_with_unknown_email_fails() {
        let users = fixtures::demo_users();
        let mut session = Session::new();
        let err = session
            .login(&users, "inconnu@company.com", DEMO_PASSWORD)
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_with_wrong_password_fails_and_keeps_session_clear() {
        let users = fixtures::demo_users();
        let mut session = Session::new();
        assert!(session.login(&users, "marie@company.com", "nope").is_err());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn error_message_matches_ui_string() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Email ou mot de passe incorrect"
        );
    }

    #[test]
    fn logout_returns_the_previous_user() {
        let users = fixtures::demo_users();
        let mut session = Session::new();
        session
            .login(&users, "sophie@company.com", DEMO_PASSWORD)
            .unwrap();
        let previous = session.logout().unwrap();
        assert_eq!(previous.email, "sophie@company.com");
        assert!(!session.is_authenticated());
    }
}
