//! Key-value persistence adapter over the browser's `localStorage`.
//!
//! DESIGN
//! ======
//! Stores depend on the [`KeyValueStore`] trait rather than on `web_sys`
//! directly, so every store runs natively against [`MemoryStorage`] in tests
//! and in non-browser builds. The adapter never fails towards callers: write
//! errors (quota, private mode) are logged and dropped.
//!
//! ERROR HANDLING
//! ==============
//! [`read_json`] reports malformed records as `ClientError::StorageParse`.
//! [`read_json_or_purge`] is the fail-soft wrapper most stores use: it logs,
//! removes the offending record, and returns `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};

/// Synchronous string store shared by every open tab of the origin.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

pub type SharedStore = Rc<dyn KeyValueStore>;

/// Logical records owned by the client and their physical key names.
///
/// Physical names match what earlier versions of the site wrote, so existing
/// favorites and preferences survive the upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Favorites,
    RecommendedMovies,
    SourceMovie,
    RecommendationsTimestamp,
    View,
    RecommendationSort,
    FavoritesView,
    FavoritesSort,
    RecentSearches,
    Theme,
}

impl StorageKey {
    pub const ALL: [StorageKey; 10] = [
        StorageKey::Favorites,
        StorageKey::RecommendedMovies,
        StorageKey::SourceMovie,
        StorageKey::RecommendationsTimestamp,
        StorageKey::View,
        StorageKey::RecommendationSort,
        StorageKey::FavoritesView,
        StorageKey::FavoritesSort,
        StorageKey::RecentSearches,
        StorageKey::Theme,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "cinematch_favorites",
            Self::RecommendedMovies => "currentRecommendations",
            Self::SourceMovie => "selectedMovie",
            Self::RecommendationsTimestamp => "recommendationsTimestamp",
            Self::View => "preferredView",
            Self::RecommendationSort => "preferredSort",
            Self::FavoritesView => "preferredFavoritesView",
            Self::FavoritesSort => "preferredFavoritesSort",
            Self::RecentSearches => "recentSearches",
            Self::Theme => "cinematch_theme",
        }
    }

    /// Map a raw key (e.g. from a `storage` event) back to its record.
    #[must_use]
    pub fn from_physical(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == raw)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `window.localStorage`. Outside the browser build every read is empty and
/// every write is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            match local_storage() {
                Some(storage) => {
                    if let Err(e) = storage.set_item(key, value) {
                        log::warn!("localStorage set_item({key}) failed: {e:?}");
                    }
                }
                None => log::warn!("localStorage unavailable, dropping write to {key}"),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage remove_item({key}) failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store. Clones share one map, so two clones behave like two
/// tabs of the same origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Stored text that older page scripts wrote when serializing a missing value.
#[must_use]
pub fn is_null_literal(raw: &str) -> bool {
    matches!(raw.trim(), "undefined" | "null")
}

/// Read and decode a JSON record.
///
/// Returns `Ok(None)` when the record is absent or blank.
///
/// # Errors
///
/// Returns `ClientError::StorageParse` for a `"undefined"`/`"null"` literal or
/// content that does not decode as `T`.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StorageKey) -> ClientResult<Option<T>> {
    let Some(raw) = store.get(key.as_str()) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    if is_null_literal(&raw) {
        return Err(ClientError::StorageParse { key: key.to_string(), reason: format!("literal {}", raw.trim()) });
    }
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ClientError::StorageParse { key: key.to_string(), reason: e.to_string() })
}

/// [`read_json`], purging the record when it is malformed.
pub fn read_json_or_purge<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StorageKey) -> Option<T> {
    match read_json(store, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("{e}; purging");
            store.remove(key.as_str());
            None
        }
    }
}

/// Encode and write a JSON record. Serialization failures are logged.
pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: StorageKey, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key.as_str(), &json),
        Err(e) => log::warn!("failed to serialize {key}: {e}"),
    }
}
