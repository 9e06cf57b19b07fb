//! # Configuration
//!
//! Access policy for the route guard and the storage keys the session
//! persists under. Defaults mirror the dashboard's routes; the login and
//! landing paths can be overridden at build time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default prefixes that require a session token.
pub const DEFAULT_PROTECTED_PREFIXES: [&str; 8] = [
    "/dashboard",
    "/properties",
    "/tenants",
    "/billing",
    "/maintenance",
    "/notifications",
    "/reports",
    "/settings",
];

const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_HOME_PATH: &str = "/dashboard";

/// Errors raised while loading an [`AccessPolicy`].
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The document is not a valid policy.
    #[error("invalid access policy: {0}")]
    Parse(#[from] serde_json::Error),
    /// The login path is itself protected, which would redirect forever.
    #[error("login path {0:?} is covered by a protected prefix")]
    LoginPathProtected(String),
}

/// Which paths need a session, and where anonymous visitors are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessPolicy {
    /// Path prefixes that require a session token.
    pub protected_prefixes: Vec<String>,
    /// Redirect target for anonymous visitors of protected paths.
    pub login_path: String,
    /// Landing page after sign-in.
    pub home_path: String,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::with_overrides(
            option_env!("APTMANAGER_LOGIN_PATH"),
            option_env!("APTMANAGER_HOME_PATH"),
        )
    }
}

impl AccessPolicy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A login override covered by a protected prefix would redirect forever,
    // so it is dropped in favour of the default login path.
    fn with_overrides(login_path: Option<&str>, home_path: Option<&str>) -> Self {
        let mut policy = Self {
            protected_prefixes: DEFAULT_PROTECTED_PREFIXES
                .iter()
                .map(ToString::to_string)
                .collect(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            home_path: home_path.unwrap_or(DEFAULT_HOME_PATH).to_string(),
        };
        if let Some(login_path) = login_path {
            if policy.is_protected(login_path) {
                log::warn!(
                    "ignoring login path override {login_path:?}: covered by a protected prefix"
                );
            } else {
                policy.login_path = login_path.to_string();
            }
        }
        policy
    }

    /// Load a policy from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`PolicyError::Parse`] for malformed JSON and
    /// [`PolicyError::LoginPathProtected`] when the login page would itself
    /// require a session.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        if policy.is_protected(&policy.login_path) {
            return Err(PolicyError::LoginPathProtected(policy.login_path));
        }
        Ok(policy)
    }

    /// Whether `path` starts with any protected prefix.
    ///
    /// This is a plain string prefix test, so `/dashboard-archive` is covered
    /// by `/dashboard`.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Redirect target for anonymous visitors.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Landing page after sign-in.
    #[must_use]
    pub fn home_path(&self) -> &str {
        &self.home_path
    }
}

/// Fixed keys the session entries are stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKeys {
    /// Key of the raw token string.
    pub token: String,
    /// Key of the JSON profile.
    pub user: String,
}

impl Default for SessionKeys {
    fn default() -> Self {
        Self {
            token: "token".to_string(),
            user: "user".to_string(),
        }
    }
}
