// ============================================================================
// SESSION STORE - Persisted access token
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::utils::storage;

/// Key/value backend for the token
pub trait TokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        storage::read_item(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        storage::write_item(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        storage::remove_item(key)
    }
}

/// Volatile storage, gone with the page
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Holds at most one access token. Created once at startup and handed to
/// every screen that needs it.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn TokenStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// localStorage under the configured key
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage), CONFIG.token_storage_key.as_str())
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()), CONFIG.token_storage_key.as_str())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, token: &str) -> Result<(), String> {
        self.storage.set(&self.key, token)?;
        log::info!("💾 [SESSION] Access token stored");
        Ok(())
    }

    /// Stored token; an empty value counts as absent
    pub fn read(&self) -> Option<String> {
        match self.storage.get(&self.key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::error!("❌ [SESSION] Error reading token: {}", e);
                None
            }
        }
    }

    pub fn clear(&self) {
        match self.storage.remove(&self.key) {
            Ok(()) => log::info!("🗑️ [SESSION] Access token cleared"),
            Err(e) => log::error!("❌ [SESSION] Error clearing token: {}", e),
        }
    }

    pub fn has_token(&self) -> bool {
        self.read().is_some()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Storage whose every operation fails, like a browser with storage disabled
    pub(crate) struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, String> {
            Err("storage disabled".to_string())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }

        fn remove(&self, _key: &str) -> Result<(), String> {
            Err("storage disabled".to_string())
        }
    }

    #[test]
    fn save_read_clear() {
        let store = SessionStore::new(Rc::new(MemoryStorage::default()), "accessToken");
        assert_eq!(store.read(), None);

        store.save("abc").unwrap();
        assert_eq!(store.read().as_deref(), Some("abc"));
        assert!(store.has_token());

        store.save("def").unwrap();
        assert_eq!(store.read().as_deref(), Some("def"));

        store.clear();
        assert_eq!(store.read(), None);
        assert!(!store.has_token());
    }

    #[test]
    fn clones_share_backend() {
        let store = SessionStore::in_memory();
        let other = store.clone();
        store.save("shared").unwrap();
        assert_eq!(other.read().as_deref(), Some("shared"));
        assert_eq!(other.key(), store.key());
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let store = SessionStore::in_memory();
        store.save("").unwrap();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn broken_storage_degrades_without_panicking() {
        let store = SessionStore::new(Rc::new(BrokenStorage), "accessToken");
        assert!(store.save("abc").is_err());
        assert_eq!(store.read(), None);
        store.clear();
    }
}
