//! Favorites store: one persisted list of favorite movies keyed by id.
//!
//! DESIGN
//! ======
//! The persisted list is the single source of truth. Nothing caches it in
//! memory; every query re-reads storage so another tab's writes are visible
//! immediately, and every mutation writes the whole list back before
//! returning. Display order comes from [`sort_favorites`] and is never
//! written back.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::net::types::{MovieSummary, Runtime, parse_year};
use crate::util::clock::Clock;
use crate::util::format::compare_titles;
use crate::util::storage::{SharedStore, StorageKey, read_json_or_purge, write_json};

/// Download name for exported favorites.
pub const EXPORT_FILE_NAME: &str = "cinematch_favorites.json";

/// A persisted favorite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub year: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Milliseconds since the epoch when the entry was added.
    #[serde(default, rename = "addedAt")]
    pub added_at: Option<i64>,
}

impl FavoriteEntry {
    /// Snapshot a listed movie as a favorite; `added_at` is set by the store.
    #[must_use]
    pub fn from_movie(movie: &MovieSummary) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster: movie.poster.clone(),
            rating: movie.rating,
            year: movie.release_year().map(|y| y.to_string()),
            release_date: movie.release_date.clone(),
            runtime: movie.runtime.clone(),
            genres: movie.genres.clone(),
            added_at: None,
        }
    }

    /// Explicit year, else the year component of `release_date`.
    #[must_use]
    pub fn display_year(&self) -> Option<String> {
        self.year
            .clone()
            .filter(|y| !y.trim().is_empty())
            .or_else(|| self.release_date.as_deref().and_then(parse_year).map(|y| y.to_string()))
    }
}

/// Sort order for the favorites page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoritesSort {
    #[default]
    Recent,
    Title,
    TitleDesc,
    Rating,
    RatingLow,
}

impl FavoritesSort {
    pub const ALL: [FavoritesSort; 5] = [
        FavoritesSort::Recent,
        FavoritesSort::Title,
        FavoritesSort::TitleDesc,
        FavoritesSort::Rating,
        FavoritesSort::RatingLow,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Title => "title",
            Self::TitleDesc => "title-desc",
            Self::Rating => "rating",
            Self::RatingLow => "rating-low",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Recent => "Recently Added",
            Self::Title => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::Rating => "Highest Rated",
            Self::RatingLow => "Lowest Rated",
        }
    }
}

/// Stable display ordering; the input is left untouched.
#[must_use]
pub fn sort_favorites(list: &[FavoriteEntry], mode: FavoritesSort) -> Vec<FavoriteEntry> {
    let mut sorted = list.to_vec();
    match mode {
        // `None < Some(_)`, so descending puts entries without a timestamp last.
        FavoritesSort::Recent => sorted.sort_by(|a, b| b.added_at.cmp(&a.added_at)),
        FavoritesSort::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        FavoritesSort::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        FavoritesSort::Rating => sorted.sort_by(|a, b| rating_or_zero(b).total_cmp(&rating_or_zero(a))),
        FavoritesSort::RatingLow => sorted.sort_by(|a, b| rating_or_zero(a).total_cmp(&rating_or_zero(b))),
    }
    sorted
}

fn rating_or_zero(entry: &FavoriteEntry) -> f64 {
    entry.rating.unwrap_or(0.0)
}

/// CRUD over the persisted favorites list.
#[derive(Clone)]
pub struct FavoritesStore {
    store: SharedStore,
    clock: Rc<dyn Clock>,
}

impl FavoritesStore {
    pub fn new(store: SharedStore, clock: Rc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Persisted entries in insertion order. Empty when absent or malformed;
    /// a malformed record is purged. Duplicate ids keep their first entry.
    #[must_use]
    pub fn list(&self) -> Vec<FavoriteEntry> {
        let list: Vec<FavoriteEntry> = read_json_or_purge(&*self.store, StorageKey::Favorites).unwrap_or_default();
        dedupe_by_id(list)
    }

    #[must_use]
    pub fn is_member(&self, id: i64) -> bool {
        self.list().iter().any(|f| f.id == id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Append `entry` stamped with the current time. Returns `false` without
    /// writing if the id is already present.
    pub fn add(&self, mut entry: FavoriteEntry) -> bool {
        let mut list = self.list();
        if list.iter().any(|f| f.id == entry.id) {
            return false;
        }
        entry.added_at = Some(self.clock.now_ms());
        log::debug!("favorite added: {} ({})", entry.title, entry.id);
        list.push(entry);
        self.persist(&list);
        true
    }

    /// Remove the entry with `id`. Returns `false` without writing if absent.
    pub fn remove(&self, id: i64) -> bool {
        let mut list = self.list();
        let before = list.len();
        list.retain(|f| f.id != id);
        if list.len() == before {
            return false;
        }
        log::debug!("favorite removed: {id}");
        self.persist(&list);
        true
    }

    /// Flip membership for `entry.id`; returns the new membership.
    pub fn toggle(&self, entry: FavoriteEntry) -> bool {
        if self.remove(entry.id) {
            false
        } else {
            self.add(entry)
        }
    }

    pub fn clear(&self) {
        self.persist(&[]);
    }

    /// Pretty-printed JSON of the list for download.
    #[must_use]
    pub fn export_json(&self) -> String {
        serde_json::to_string_pretty(&self.list()).unwrap_or_else(|_| "[]".to_owned())
    }

    fn persist(&self, list: &[FavoriteEntry]) {
        write_json(&*self.store, StorageKey::Favorites, list);
    }
}

fn dedupe_by_id(list: Vec<FavoriteEntry>) -> Vec<FavoriteEntry> {
    let mut seen = std::collections::HashSet::new();
    list.into_iter().filter(|f| seen.insert(f.id)).collect()
}

/// Older records stored `year` as either a string or a number.
fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
