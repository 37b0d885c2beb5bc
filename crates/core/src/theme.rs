//! Dark-mode flag with best-effort persistence.

use crate::error::StorageError;
use std::collections::HashMap;

pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value persistence in the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// The visual root the frontend paints into (document element on the web).
pub trait DocumentRoot {
    fn set_dark_marker(&mut self, dark: bool);
    fn set_scroll_locked(&mut self, locked: bool);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Plain record of what was applied to the root; the terminal frontend reads
/// it back when drawing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootState {
    pub dark: bool,
    pub scroll_locked: bool,
}

impl DocumentRoot for RootState {
    fn set_dark_marker(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[derive(Debug)]
pub struct ThemeController<S> {
    storage: S,
    dark_mode: bool,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Reads the persisted flag once. Only the exact string `"true"` is dark.
    pub fn load(storage: S) -> Self {
        let dark_mode = match storage.get_item(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                log::warn!("could not read theme preference, using light mode: {e}");
                false
            }
        };

        Self { storage, dark_mode }
    }

    pub const fn is_dark(&self) -> bool {
        self.dark_mode
    }

    pub fn apply(&self, root: &mut impl DocumentRoot) {
        root.set_dark_marker(self.dark_mode);
    }

    /// Flips the flag, repaints the root and persists. Returns the new flag.
    pub fn toggle(&mut self, root: &mut impl DocumentRoot) -> bool {
        self.dark_mode = !self.dark_mode;
        self.apply(root);

        let value = if self.dark_mode { "true" } else { "false" };
        if let Err(e) = self.storage.set_item(DARK_MODE_KEY, value) {
            log::warn!("could not persist theme preference: {e}");
        }

        self.dark_mode
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn persisted(theme: &ThemeController<MemoryStore>) -> Option<String> {
        theme.storage().get_item(DARK_MODE_KEY).ok().flatten()
    }

    #[test]
    fn missing_value_means_light() {
        let theme = ThemeController::load(MemoryStore::new());
        assert!(!theme.is_dark());
    }

    #[test]
    fn only_exact_true_means_dark() {
        assert!(ThemeController::load(MemoryStore::with_item(DARK_MODE_KEY, "true")).is_dark());
        assert!(!ThemeController::load(MemoryStore::with_item(DARK_MODE_KEY, "TRUE")).is_dark());
        assert!(!ThemeController::load(MemoryStore::with_item(DARK_MODE_KEY, "1")).is_dark());
    }

    #[test]
    fn toggle_applies_and_persists() {
        let mut theme = ThemeController::load(MemoryStore::new());
        let mut root = RootState::default();

        assert!(theme.toggle(&mut root));
        assert!(root.dark);
        assert_eq!(persisted(&theme).as_deref(), Some("true"));

        assert!(!theme.toggle(&mut root));
        assert!(!root.dark);
        assert_eq!(persisted(&theme).as_deref(), Some("false"));
    }

    #[test]
    fn double_toggle_restores_original_flag() {
        let mut theme = ThemeController::load(MemoryStore::with_item(DARK_MODE_KEY, "true"));
        let mut root = RootState::default();

        theme.toggle(&mut root);
        theme.toggle(&mut root);
        assert!(theme.is_dark());
        assert_eq!(persisted(&theme).as_deref(), Some("true"));
    }

    #[test]
    fn broken_storage_is_ignored() {
        let mut theme = ThemeController::load(BrokenStore);
        let mut root = RootState::default();
        assert!(!theme.is_dark());

        assert!(theme.toggle(&mut root));
        assert!(root.dark);
    }
}
