//! Recently searched titles, most recent first.

#[cfg(test)]
#[path = "recent_searches_test.rs"]
mod recent_searches_test;

use crate::config::DEFAULT_MAX_RECENT;
use crate::util::storage::{SharedStore, StorageKey, read_json_or_purge, write_json};

/// Move `title` to the front, dropping exact duplicates and anything past `max`.
#[must_use]
pub fn push_recent(list: &[String], title: &str, max: usize) -> Vec<String> {
    std::iter::once(title.to_owned())
        .chain(list.iter().filter(|t| t.as_str() != title).cloned())
        .take(max)
        .collect()
}

#[derive(Clone)]
pub struct RecentSearches {
    store: SharedStore,
    max: usize,
}

impl RecentSearches {
    pub fn new(store: SharedStore) -> Self {
        Self::with_max(store, DEFAULT_MAX_RECENT)
    }

    pub fn with_max(store: SharedStore, max: usize) -> Self {
        Self { store, max }
    }

    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let mut list: Vec<String> = read_json_or_purge(&*self.store, StorageKey::RecentSearches).unwrap_or_default();
        list.truncate(self.max);
        list
    }

    /// Record a search. Blank titles are ignored.
    pub fn record(&self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        let next = push_recent(&self.list(), title, self.max);
        write_json(&*self.store, StorageKey::RecentSearches, &next);
    }

    pub fn clear(&self) {
        self.store.remove(StorageKey::RecentSearches.as_str());
    }
}
