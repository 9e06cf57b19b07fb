use serde::{Deserialize, Serialize};

const FALLBACK_INITIAL: &str = "U";
const FALLBACK_NAME: &str = "User";
const FALLBACK_EMAIL: &str = "loading...";

/// Display-only profile kept next to the session token.
///
/// Both fields are optional: a login only knows the email address, a
/// registration knows the name as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name entered at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address used to sign in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserProfile {
    /// Profile created by a login, which only captures the email address.
    #[must_use]
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            name: None,
            email: Some(email.into()),
        }
    }

    /// Profile created by a registration.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    /// Avatar letter: first letter of the name, else of the email, else `U`.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name()
            .or_else(|| self.email())
            .and_then(|value| value.chars().next())
            .map_or_else(
                || FALLBACK_INITIAL.to_string(),
                |first| first.to_uppercase().collect(),
            )
    }

    /// Name shown in the sidebar badge.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(FALLBACK_NAME)
    }

    /// Email shown under the name in the sidebar badge.
    #[must_use]
    pub fn display_email(&self) -> &str {
        self.email().unwrap_or(FALLBACK_EMAIL)
    }
}
