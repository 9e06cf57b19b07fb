use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential marking a browser session as signed in.
///
/// Nothing about its structure is assumed. Presence means authenticated,
/// absence means anonymous; there is no expiry and no refresh.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value as persisted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the raw value is empty. Empty tokens never count as a session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SessionToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SessionToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Tokens stay out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}
