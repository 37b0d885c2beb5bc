use grand_strategy_core::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage`. Private browsing or a sandboxed frame can deny
/// access; that surfaces as `StorageError::Unavailable` on each call.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"localStorage unavailable; theme will not persist".into());
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))
    }
}

fn js_error(error: &JsValue) -> StorageError {
    StorageError::Unavailable(
        error
            .as_string()
            .unwrap_or_else(|| format!("{error:?}")),
    )
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| js_error(&e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let result = self.storage()?.set_item(key, value).map_err(|e| js_error(&e));
        if let Err(error) = &result {
            web_sys::console::warn_1(&write_warning(key, error).into());
        }
        result
    }
}

// The browser build has no log sink; write failures go to the console.
fn write_warning(key: &str, error: &StorageError) -> String {
    format!("Could not save \"{key}\" to localStorage: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_warning_names_key_and_cause() {
        let error = StorageError::Unavailable("QuotaExceededError".to_string());
        let message = write_warning("darkMode", &error);
        assert!(message.contains("\"darkMode\""));
        assert!(message.contains("QuotaExceededError"));
    }
}
