//! Browser local storage backend for the session store.
//!
//! Values are stored raw rather than through gloo's JSON layer so the token
//! sits in local storage as a plain string, next to the JSON profile.

use shared::storage::{DetachedStore, KeyValueStore};
use std::rc::Rc;

/// Shared handle to whichever backend this context supports.
pub type Backend = Rc<dyn KeyValueStore>;

/// Pick local storage when running in a browser window, otherwise a
/// detached backend that keeps nothing.
pub fn session_backend() -> Backend {
    #[cfg(target_arch = "wasm32")]
    {
        if browser::BrowserStorage::is_available() {
            log::debug!("session backed by local storage");
            return Rc::new(browser::BrowserStorage);
        }
    }
    log::warn!("local storage unavailable, session will not persist");
    Rc::new(DetachedStore)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_storage::{LocalStorage, Storage};
    use shared::storage::{KeyValueStore, StorageError};
    use wasm_bindgen::JsValue;

    /// `window.localStorage`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStorage;

    impl BrowserStorage {
        /// Whether a window with local storage exists.
        pub fn is_available() -> bool {
            handle().is_ok()
        }
    }

    fn js_error(err: &JsValue) -> StorageError {
        StorageError::Backend(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    // gloo's `raw()` throws when storage is missing, so probe first.
    fn handle() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(_)) => Ok(LocalStorage::raw()),
            Ok(None) => Err(StorageError::Unavailable),
            Err(err) => Err(js_error(&err)),
        }
    }

    impl KeyValueStore for BrowserStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            handle()?.get_item(key).map_err(|err| js_error(&err))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            handle()?.set_item(key, value).map_err(|err| js_error(&err))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            handle()?.remove_item(key).map_err(|err| js_error(&err))
        }
    }
}
