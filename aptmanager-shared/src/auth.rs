//! Mock sign-in.
//!
//! There is no backend: a successful form submission stores a fixed token
//! and the profile derived from the form.

use crate::models::{SessionToken, UserProfile};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Token stored by every mock sign-in.
pub const MOCK_SESSION_TOKEN: &str = "fake-jwt-token";

/// Simulated network latency of a sign-in, in milliseconds.
pub const MOCK_SIGN_IN_DELAY_MS: u32 = 1_500;

/// Start a session for `profile`.
pub fn sign_in<S: KeyValueStore>(session: &SessionStore<S>, profile: &UserProfile) {
    session.set_token(&SessionToken::from(MOCK_SESSION_TOKEN));
    session.set_user(profile);
    log::info!("signed in as {}", profile.display_email());
}

/// End the current session.
pub fn sign_out<S: KeyValueStore>(session: &SessionStore<S>) {
    session.clear();
    log::info!("signed out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::validation::{LoginForm, RegisterForm};

    #[test]
    fn test_login_stores_token_and_email() {
        let session = SessionStore::new(MemoryStore::new());
        let form = LoginForm {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
            remember_me: false,
        };
        sign_in(&session, &form.profile());

        assert_eq!(session.token(), Some(SessionToken::from(MOCK_SESSION_TOKEN)));
        assert_eq!(session.user(), Some(UserProfile::from_email("ada@example.com")));
    }

    #[test]
    fn test_register_stores_name_and_email() {
        let session = SessionStore::new(MemoryStore::new());
        let form = RegisterForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        };
        sign_in(&session, &form.profile());

        let user = session.user().unwrap();
        assert_eq!(user.display_name(), "Ada");
        assert_eq!(user.initial(), "A");
    }

    #[test]
    fn test_sign_out_clears_session() {
        let session = SessionStore::new(MemoryStore::new());
        sign_in(&session, &UserProfile::from_email("ada@example.com"));
        sign_out(&session);

        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }
}
