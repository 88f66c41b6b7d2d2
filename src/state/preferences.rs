//! View, sort, and theme preferences.
//!
//! Each axis is its own plain-string record, so a bad value in one never
//! disturbs another. Unrecognized values read as the default and are purged.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use crate::state::favorites::FavoritesSort;
use crate::state::recommendations::RecommendationSort;
use crate::util::storage::{SharedStore, StorageKey};
use crate::util::theme::Theme;

/// Card layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct PreferenceStore {
    store: SharedStore,
}

impl PreferenceStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Recommendations layout, default grid.
    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.read(StorageKey::View, ViewMode::parse)
    }

    pub fn set_view(&self, mode: ViewMode) {
        self.store.set(StorageKey::View.as_str(), mode.as_str());
    }

    /// Favorites page layout, default grid.
    #[must_use]
    pub fn favorites_view(&self) -> ViewMode {
        self.read(StorageKey::FavoritesView, ViewMode::parse)
    }

    pub fn set_favorites_view(&self, mode: ViewMode) {
        self.store.set(StorageKey::FavoritesView.as_str(), mode.as_str());
    }

    #[must_use]
    pub fn recommendation_sort(&self) -> RecommendationSort {
        self.read(StorageKey::RecommendationSort, RecommendationSort::parse)
    }

    pub fn set_recommendation_sort(&self, mode: RecommendationSort) {
        self.store.set(StorageKey::RecommendationSort.as_str(), mode.as_str());
    }

    #[must_use]
    pub fn favorites_sort(&self) -> FavoritesSort {
        self.read(StorageKey::FavoritesSort, FavoritesSort::parse)
    }

    pub fn set_favorites_sort(&self, mode: FavoritesSort) {
        self.store.set(StorageKey::FavoritesSort.as_str(), mode.as_str());
    }

    /// Color theme, default dark.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.read(StorageKey::Theme, Theme::parse)
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(StorageKey::Theme.as_str(), theme.as_str());
    }

    fn read<T: Default>(&self, key: StorageKey, parse: fn(&str) -> Option<T>) -> T {
        let Some(raw) = self.store.get(key.as_str()) else {
            return T::default();
        };
        parse(&raw).unwrap_or_else(|| {
            log::warn!("unrecognized value {raw:?} for {key}; purging");
            self.store.remove(key.as_str());
            T::default()
        })
    }
}
