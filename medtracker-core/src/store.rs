use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;
use crate::theme::{Theme, DEFAULT_THEME};

/// String key-value backend, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// Session-only store. Used in tests and when the browser refuses storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        (**self).set_item(key, value)
    }
}

/// The persisted theme preference: one key in a [`KeyValueStore`].
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the stored theme. Unreadable storage counts as no preference.
    pub fn read(&self) -> Theme {
        match self.store.get_item(&self.key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(e) => {
                log::warn!("Failed to read theme preference, using default: {}", e);
                DEFAULT_THEME
            }
        }
    }

    pub fn write(&self, theme: Theme) {
        if let Err(e) = self.store.set_item(&self.key, theme.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
    }
}
