//! The user's starred assets, persisted through a key-value backend.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus_logger::tracing::warn;
use thiserror::Error;

use crate::market::AssetId;

/// Storage key holding the JSON array of favorite ids.
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Error, Debug)]
pub enum StorageError {
    /// The backend refused the write (quota exceeded, private mode...).
    #[error("storage write rejected: {0}")]
    Rejected(String),
    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal string key-value storage, shaped after the browser's
/// `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.0.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The set of favorite asset ids.
///
/// Ids are kept ordered and unique, so the persisted array is stable: a
/// double toggle writes back byte-identical JSON.
pub struct Favorites {
    ids: BTreeSet<AssetId>,
    backend: Box<dyn KeyValueStore>,
}

impl Favorites {
    /// Reads the persisted set from `backend`.
    ///
    /// A missing entry is an empty set. An entry that is not a JSON array of
    /// strings is logged and also treated as empty; it stays in storage
    /// until the next toggle overwrites it.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let ids = match backend.get_item(FAVORITES_KEY) {
            None => BTreeSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<AssetId>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!("ignoring malformed favorites {:?}: {}", raw, e);
                    BTreeSet::new()
                }
            },
        };
        Self { ids, backend }
    }

    pub fn is_favorite(&self, id: &AssetId) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id` and writes the whole set back.
    ///
    /// Returns the new membership. If the write fails the in-memory change
    /// is kept and the error returned.
    pub fn toggle(&mut self, id: &AssetId) -> Result<bool, StorageError> {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.ids)?;
        self.backend.set_item(FAVORITES_KEY, &json)
    }
}

impl std::fmt::Debug for Favorites {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.ids.iter()).finish()
    }
}

#[cfg(test)]
impl Favorites {
    fn len(&self) -> usize {
        self.ids.len()
    }

    fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn empty_when_nothing_stored() {
        let favorites = Favorites::load(Box::new(MemoryStore::default()));
        assert!(favorites.is_empty());
        assert!(!favorites.is_favorite(&"bitcoin".into()));
    }

    #[test]
    fn loads_stored_array() {
        let store = MemoryStore::with_item(FAVORITES_KEY, r#"["solana","bitcoin"]"#);
        let favorites = Favorites::load(Box::new(store));
        assert_eq!(favorites.len(), 2);
        assert!(favorites.is_favorite(&"bitcoin".into()));
        assert!(favorites.is_favorite(&"solana".into()));
    }

    #[test]
    fn duplicates_collapse_on_load() {
        let store = MemoryStore::with_item(FAVORITES_KEY, r#"["eth","eth","btc"]"#);
        let favorites = Favorites::load(Box::new(store));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn malformed_storage_reads_as_empty() {
        for raw in [r#"{"bitcoin":true}"#, "not json", "[1,2]", "null"] {
            let store = MemoryStore::with_item(FAVORITES_KEY, raw);
            let favorites = Favorites::load(Box::new(store.clone()));
            assert!(favorites.is_empty(), "{raw}");
            // left untouched until a toggle
            assert_eq!(store.get_item(FAVORITES_KEY).as_deref(), Some(raw));
        }
    }

    #[test]
    fn toggle_persists_full_set() {
        let store = MemoryStore::default();
        let mut favorites = Favorites::load(Box::new(store.clone()));

        assert!(favorites.toggle(&"ethereum".into()).unwrap());
        assert!(favorites.toggle(&"bitcoin".into()).unwrap());
        assert_eq!(
            store.get_item(FAVORITES_KEY).as_deref(),
            Some(r#"["bitcoin","ethereum"]"#)
        );

        assert!(!favorites.toggle(&"ethereum".into()).unwrap());
        assert_eq!(
            store.get_item(FAVORITES_KEY).as_deref(),
            Some(r#"["bitcoin"]"#)
        );
    }

    #[test]
    fn double_toggle_restores_persisted_set() {
        let original = r#"["bitcoin","cardano"]"#;
        let store = MemoryStore::with_item(FAVORITES_KEY, original);
        let mut favorites = Favorites::load(Box::new(store.clone()));

        for id in ["bitcoin", "dogecoin"] {
            let id = AssetId::new(id);
            favorites.toggle(&id).unwrap();
            favorites.toggle(&id).unwrap();
            assert_eq!(store.get_item(FAVORITES_KEY).as_deref(), Some(original));
        }
    }

    #[test]
    fn reload_sees_toggled_state() {
        let store = MemoryStore::default();
        let mut favorites = Favorites::load(Box::new(store.clone()));
        favorites.toggle(&"tether".into()).unwrap();

        let reloaded = Favorites::load(Box::new(store));
        assert!(reloaded.is_favorite(&"tether".into()));
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let mut favorites = Favorites::load(Box::new(ReadOnlyStore));
        let err = favorites.toggle(&"bitcoin".into()).unwrap_err();
        assert!(matches!(err, StorageError::Rejected(_)));
        assert!(favorites.is_favorite(&"bitcoin".into()));
    }
}
