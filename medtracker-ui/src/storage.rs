use medtracker_core::{KeyValueStore, MemoryStore, PageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

fn storage_error(e: JsValue) -> PageError {
    PageError::Storage(format!("{:?}", e))
}

/// `localStorage` when the browser grants it, otherwise a store that only
/// lasts for the page (private browsing, storage disabled by policy).
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn local_or_memory() -> Self {
        match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStore::Local(storage),
            Some(Err(e)) => {
                log::warn!("localStorage denied, theme will not persist: {:?}", e);
                BrowserStore::Memory(MemoryStore::new())
            }
            _ => {
                log::warn!("localStorage unavailable, theme will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(storage_error),
            BrowserStore::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        match self {
            BrowserStore::Local(storage) => storage.set_item(key, value).map_err(storage_error),
            BrowserStore::Memory(memory) => memory.set_item(key, value),
        }
    }
}
