//! Bookmark state with pluggable persistence
//!
//! The store owns the in-memory bookmark set; persistence goes through an
//! injected [`BookmarkStorage`] adapter so the web layer can back it with
//! `localStorage` while tests use [`MemoryStorage`]. Every mutation writes
//! through to the adapter.

use std::cell::RefCell;

use crate::error::CatalogError;

/// Persistence seam for bookmarked resource ids.
pub trait BookmarkStorage {
    fn load(&self) -> Result<Vec<String>, CatalogError>;
    fn save(&self, ids: &[String]) -> Result<(), CatalogError>;
}

/// Bookmarked resource ids in the order they were added.
pub struct BookmarkStore<S: BookmarkStorage> {
    ids: Vec<String>,
    storage: S,
}

impl<S: BookmarkStorage> BookmarkStore<S> {
    /// Build a store from whatever the adapter has persisted. A failed load
    /// starts empty rather than failing app startup.
    pub fn hydrate(storage: S) -> Self {
        let ids = match storage.load() {
            Ok(ids) => ids,
            Err(err) => {
                tracing::warn!(%err, "could not load persisted bookmarks, starting empty");
                Vec::new()
            }
        };
        Self { ids, storage }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|b| b == id)
    }

    /// Add or remove a bookmark, writing through to storage. Returns whether
    /// the id is bookmarked after the call.
    pub fn toggle(&mut self, id: &str) -> Result<bool, CatalogError> {
        let bookmarked = match self.ids.iter().position(|b| b == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        self.storage.save(&self.ids)?;
        Ok(bookmarked)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// In-memory adapter. Used in tests and as the server-side fallback where no
/// browser storage exists.
#[derive(Default)]
pub struct MemoryStorage {
    ids: RefCell<Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids(ids: Vec<String>) -> Self {
        Self {
            ids: RefCell::new(ids),
        }
    }
}

impl BookmarkStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.ids.borrow().clone())
    }

    fn save(&self, ids: &[String]) -> Result<(), CatalogError> {
        *self.ids.borrow_mut() = ids.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStorage;

    impl BookmarkStorage for FailingStorage {
        fn load(&self) -> Result<Vec<String>, CatalogError> {
            Err(CatalogError::Storage("backend unavailable".into()))
        }

        fn save(&self, _ids: &[String]) -> Result<(), CatalogError> {
            Err(CatalogError::Storage("backend unavailable".into()))
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = BookmarkStore::hydrate(MemoryStorage::new());

        assert!(store.toggle("n-1").unwrap());
        assert!(store.contains("n-1"));
        assert_eq!(store.len(), 1);

        assert!(!store.toggle("n-1").unwrap());
        assert!(!store.contains("n-1"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_hydrate_restores_persisted_ids() {
        let storage = MemoryStorage::with_ids(vec!["a".into(), "b".into()]);
        let store = BookmarkStore::hydrate(storage);

        assert_eq!(store.ids(), ["a".to_string(), "b".to_string()]);
        assert!(store.contains("b"));
    }

    #[test]
    fn test_mutations_write_through() {
        let mut store = BookmarkStore::hydrate(MemoryStorage::new());
        store.toggle("x").unwrap();
        store.toggle("y").unwrap();
        store.toggle("x").unwrap();

        // Rehydrating from the same adapter sees the final state.
        let reloaded = BookmarkStore::hydrate(MemoryStorage::with_ids(
            store.ids().to_vec(),
        ));
        assert_eq!(reloaded.ids(), ["y".to_string()]);
    }

    #[test]
    fn test_failed_load_starts_empty() {
        let store = BookmarkStore::hydrate(FailingStorage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_save_surfaces_error() {
        let mut store = BookmarkStore::hydrate(FailingStorage);
        assert!(store.toggle("n-1").is_err());
    }
}
