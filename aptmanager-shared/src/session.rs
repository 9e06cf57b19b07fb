//! # Session store
//!
//! Holds the session token and the display profile in a [`KeyValueStore`].
//! None of the operations fail: backend errors and undecodable profiles are
//! logged and read back as absent values.

use crate::config::SessionKeys;
use crate::models::{SessionToken, UserProfile};
use crate::storage::{KeyValueStore, StorageError};

/// Session token and profile persisted in a key-value backend.
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
    keys: SessionKeys,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a store using the default keys.
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self::with_keys(backend, SessionKeys::default())
    }

    /// Create a store using custom keys.
    #[must_use]
    pub fn with_keys(backend: S, keys: SessionKeys) -> Self {
        Self { backend, keys }
    }

    /// The underlying backend.
    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// The stored token. Empty values count as absent.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.read(&self.keys.token)
            .map(SessionToken::from)
            .filter(|token| !token.is_empty())
    }

    /// Persist `token`, replacing any previous one.
    pub fn set_token(&self, token: &SessionToken) {
        self.write(&self.keys.token, token.as_str());
    }

    /// Remove the token only.
    pub fn remove_token(&self) {
        self.delete(&self.keys.token);
    }

    /// The stored profile, if present and decodable.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.read(&self.keys.user)?;
        match serde_json::from_str::<Option<UserProfile>>(&raw) {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!(
                    "discarding unreadable profile under {:?}: {}",
                    self.keys.user,
                    StorageError::from(err)
                );
                None
            }
        }
    }

    /// Persist `profile` as JSON.
    pub fn set_user(&self, profile: &UserProfile) {
        match serde_json::to_string(profile) {
            Ok(json) => self.write(&self.keys.user, &json),
            Err(err) => log::warn!("failed to encode profile: {}", StorageError::from(err)),
        }
    }

    /// Remove the profile only.
    pub fn remove_user(&self) {
        self.delete(&self.keys.user);
    }

    /// Remove every session entry.
    pub fn clear(&self) {
        self.remove_token();
        self.remove_user();
    }

    /// Whether a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    fn read(&self, key: &str) -> Option<String> {
        self.backend.get(key).unwrap_or_else(|err| {
            log::warn!("failed to read {key:?} from session storage: {err}");
            None
        })
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.set(key, value) {
            log::warn!("failed to write {key:?} to session storage: {err}");
        }
    }

    fn delete(&self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            log::warn!("failed to remove {key:?} from session storage: {err}");
        }
    }
}
