//! Render synchronizer: store data in, display snapshots out.
//!
//! DESIGN
//! ======
//! `RenderSync` owns handles to the three persisted stores and a
//! [`Renderer`]. It never keeps its own copy of store data: every snapshot is
//! built from a fresh read, and favorite flags come from the favorites list
//! as it is at render time. Each mutation writes through the owning store and
//! then re-presents every surface that depends on the changed record, so
//! counters and heart icons cannot disagree with storage once a call returns.
//!
//! Cross-tab changes arrive as [`SyncEvent`]s. Handling one only re-reads and
//! re-presents, so replaying the same event yields the same snapshots.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos app implements [`Renderer`] by writing snapshots into signals;
//! tests implement it by recording what was presented.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::collections::HashSet;
use std::rc::Rc;

use crate::net::types::MovieSummary;
use crate::state::favorites::{FavoriteEntry, FavoritesSort, FavoritesStore, sort_favorites};
use crate::state::preferences::{PreferenceStore, ViewMode};
use crate::state::recommendations::{RecommendationCache, RecommendationSort, SourceMovie, sort_movies};
use crate::util::clock::Clock;
use crate::util::format::{NOT_AVAILABLE, excerpt, rating_label, runtime_label, similarity_label, year_label};
use crate::util::storage::{SharedStore, StorageKey};

/// Genre tags shown on a grid card.
pub const GRID_GENRE_LIMIT: usize = 3;
/// Overview length on a grid card.
pub const GRID_OVERVIEW_CHARS: usize = 120;
/// Overview length on a list row.
pub const LIST_OVERVIEW_CHARS: usize = 250;

/// A rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Recommendations,
    Favorites,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Recommendations, Surface::Favorites];

    /// Surfaces whose snapshot reads `key`.
    #[must_use]
    pub fn dependents(key: StorageKey) -> &'static [Surface] {
        match key {
            // Favorite flags and the navbar counter appear on both pages.
            StorageKey::Favorites => &Self::ALL,
            StorageKey::RecommendedMovies
            | StorageKey::SourceMovie
            | StorageKey::RecommendationsTimestamp
            | StorageKey::View
            | StorageKey::RecommendationSort => &[Surface::Recommendations],
            StorageKey::FavoritesView | StorageKey::FavoritesSort => &[Surface::Favorites],
            StorageKey::RecentSearches | StorageKey::Theme => &[],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Empty,
    Loaded,
}

/// Active sort control, typed per surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortMode {
    Recommendations(RecommendationSort),
    Favorites(FavoritesSort),
}

impl SortMode {
    #[must_use]
    pub fn surface(self) -> Surface {
        match self {
            Self::Recommendations(_) => Surface::Recommendations,
            Self::Favorites(_) => Surface::Favorites,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recommendations(mode) => mode.as_str(),
            Self::Favorites(mode) => mode.as_str(),
        }
    }

    /// Parse a sort control value for `surface`.
    #[must_use]
    pub fn parse_for(surface: Surface, raw: &str) -> Option<Self> {
        match surface {
            Surface::Recommendations => RecommendationSort::parse(raw).map(Self::Recommendations),
            Surface::Favorites => FavoritesSort::parse(raw).map(Self::Favorites),
        }
    }

    /// `(value, label)` pairs for the sort dropdown on `surface`.
    #[must_use]
    pub fn options(surface: Surface) -> Vec<(&'static str, &'static str)> {
        match surface {
            Surface::Recommendations => RecommendationSort::ALL.iter().map(|m| (m.as_str(), m.label())).collect(),
            Surface::Favorites => FavoritesSort::ALL.iter().map(|m| (m.as_str(), m.label())).collect(),
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        Self::Recommendations(RecommendationSort::default())
    }
}

/// Derived counts; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub favorites: usize,
    pub results: usize,
}

/// One card's display data.
#[derive(Clone, Debug, PartialEq)]
pub struct CardRecord {
    pub id: i64,
    pub title: String,
    pub poster: String,
    pub rating_label: String,
    pub year_label: String,
    pub runtime_label: Option<String>,
    pub genres: Vec<String>,
    pub similarity_label: Option<String>,
    pub overview_excerpt: Option<String>,
    pub is_favorite: bool,
    /// What the heart button adds when toggled on.
    pub entry: FavoriteEntry,
}

/// Everything a surface needs to draw itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub page: PageState,
    pub view: ViewMode,
    pub sort: SortMode,
    pub cards: Vec<CardRecord>,
    pub counters: Counters,
    /// "Based on" title for recommendations.
    pub source_title: Option<String>,
}

/// Render target for snapshots.
pub trait Renderer {
    fn present(&self, surface: Surface, snapshot: &Snapshot);
}

/// Inbound notifications the synchronizer reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// Another tab changed storage. `None` means storage was cleared.
    StorageChanged { key: Option<String> },
}

pub struct RenderSync<R: Renderer> {
    favorites: FavoritesStore,
    cache: RecommendationCache,
    prefs: PreferenceStore,
    renderer: R,
}

impl<R: Renderer> RenderSync<R> {
    pub fn new(store: SharedStore, clock: Rc<dyn Clock>, renderer: R) -> Self {
        Self {
            favorites: FavoritesStore::new(store.clone(), clock.clone()),
            cache: RecommendationCache::new(store.clone(), clock),
            prefs: PreferenceStore::new(store),
            renderer,
        }
    }

    pub fn from_stores(
        favorites: FavoritesStore,
        cache: RecommendationCache,
        prefs: PreferenceStore,
        renderer: R,
    ) -> Self {
        Self { favorites, cache, prefs, renderer }
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    #[must_use]
    pub fn preferences(&self) -> &PreferenceStore {
        &self.prefs
    }

    // =============================================================
    // Rendering
    // =============================================================

    /// Sort `movies` and emit one card per movie with fresh favorite flags.
    #[must_use]
    pub fn render_recommendations(
        &self,
        movies: &[MovieSummary],
        source: Option<&SourceMovie>,
        view: ViewMode,
        sort: RecommendationSort,
    ) -> Snapshot {
        let favorites = self.favorites.list();
        let member: HashSet<i64> = favorites.iter().map(|f| f.id).collect();
        let cards: Vec<CardRecord> = sort_movies(movies, sort)
            .iter()
            .map(|m| movie_card(m, view, member.contains(&m.id)))
            .collect();
        Snapshot {
            page: page_state(&cards),
            view,
            sort: SortMode::Recommendations(sort),
            counters: Counters { favorites: favorites.len(), results: cards.len() },
            cards,
            source_title: source.map(|s| s.title.clone()),
        }
    }

    /// Sort `list` and emit one card per favorite.
    #[must_use]
    pub fn render_favorites(&self, list: &[FavoriteEntry], view: ViewMode, sort: FavoritesSort) -> Snapshot {
        let cards: Vec<CardRecord> = sort_favorites(list, sort)
            .iter()
            .map(|f| favorite_card(f, view))
            .collect();
        Snapshot {
            page: page_state(&cards),
            view,
            sort: SortMode::Favorites(sort),
            counters: Counters { favorites: self.favorites.count(), results: cards.len() },
            cards,
            source_title: None,
        }
    }

    /// Build the current snapshot for `surface` from storage.
    #[must_use]
    pub fn snapshot(&self, surface: Surface) -> Snapshot {
        match surface {
            Surface::Recommendations => {
                let view = self.prefs.view();
                let sort = self.prefs.recommendation_sort();
                match self.cache.load() {
                    Some(cached) => self.render_recommendations(&cached.movies, cached.source_movie.as_ref(), view, sort),
                    None => self.render_recommendations(&[], None, view, sort),
                }
            }
            Surface::Favorites => {
                let list = self.favorites.list();
                self.render_favorites(&list, self.prefs.favorites_view(), self.prefs.favorites_sort())
            }
        }
    }

    /// Re-read and present one surface.
    pub fn sync(&self, surface: Surface) {
        let snapshot = self.snapshot(surface);
        self.renderer.present(surface, &snapshot);
    }

    pub fn sync_all(&self) {
        for surface in Surface::ALL {
            self.sync(surface);
        }
    }

    fn sync_dependents(&self, key: StorageKey) {
        for surface in Surface::dependents(key) {
            self.sync(*surface);
        }
    }

    // =============================================================
    // Mutations
    // =============================================================

    /// Flip membership for the card's movie; returns the new membership.
    pub fn toggle_favorite(&self, entry: FavoriteEntry) -> bool {
        let now_member = self.favorites.toggle(entry);
        self.sync_dependents(StorageKey::Favorites);
        now_member
    }

    /// Returns whether anything was removed.
    pub fn remove_favorite(&self, id: i64) -> bool {
        let removed = self.favorites.remove(id);
        self.sync_dependents(StorageKey::Favorites);
        removed
    }

    pub fn clear_favorites(&self) {
        self.favorites.clear();
        self.sync_dependents(StorageKey::Favorites);
    }

    /// Cache a fresh result set and present it.
    pub fn show_recommendations(&self, movies: &[MovieSummary], source: Option<&SourceMovie>) {
        self.cache.save(movies, source);
        self.sync_dependents(StorageKey::RecommendedMovies);
    }

    pub fn clear_recommendations(&self) {
        self.cache.clear();
        self.sync_dependents(StorageKey::RecommendedMovies);
    }

    /// Change layout; the data is untouched.
    pub fn set_view(&self, surface: Surface, view: ViewMode) {
        match surface {
            Surface::Recommendations => {
                self.prefs.set_view(view);
                self.sync_dependents(StorageKey::View);
            }
            Surface::Favorites => {
                self.prefs.set_favorites_view(view);
                self.sync_dependents(StorageKey::FavoritesView);
            }
        }
    }

    /// Change ordering; the data is untouched.
    pub fn set_sort(&self, sort: SortMode) {
        match sort {
            SortMode::Recommendations(mode) => {
                self.prefs.set_recommendation_sort(mode);
                self.sync_dependents(StorageKey::RecommendationSort);
            }
            SortMode::Favorites(mode) => {
                self.prefs.set_favorites_sort(mode);
                self.sync_dependents(StorageKey::FavoritesSort);
            }
        }
    }

    // =============================================================
    // Events
    // =============================================================

    /// Re-present the surfaces affected by `event`; returns them.
    pub fn handle_event(&self, event: &SyncEvent) -> Vec<Surface> {
        let SyncEvent::StorageChanged { key } = event;
        let surfaces: Vec<Surface> = match key.as_deref() {
            None => Surface::ALL.to_vec(),
            Some(raw) => match StorageKey::from_physical(raw) {
                Some(key) => Surface::dependents(key).to_vec(),
                None => {
                    log::debug!("ignoring storage change for foreign key {raw}");
                    Vec::new()
                }
            },
        };
        for surface in &surfaces {
            self.sync(*surface);
        }
        surfaces
    }
}

fn page_state(cards: &[CardRecord]) -> PageState {
    if cards.is_empty() { PageState::Empty } else { PageState::Loaded }
}

fn movie_card(movie: &MovieSummary, view: ViewMode, is_favorite: bool) -> CardRecord {
    let (genre_limit, overview_chars) = match view {
        ViewMode::Grid => (GRID_GENRE_LIMIT, GRID_OVERVIEW_CHARS),
        ViewMode::List => (usize::MAX, LIST_OVERVIEW_CHARS),
    };
    CardRecord {
        id: movie.id,
        title: movie.title.clone(),
        poster: movie.poster.clone(),
        rating_label: rating_label(movie.rating),
        year_label: year_label(movie.release_date.as_deref()),
        runtime_label: runtime_label(movie.runtime.as_ref()),
        genres: movie.genres.iter().take(genre_limit).cloned().collect(),
        similarity_label: similarity_label(movie.similarity),
        overview_excerpt: movie
            .overview
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| excerpt(o, overview_chars)),
        is_favorite,
        entry: FavoriteEntry::from_movie(movie),
    }
}

fn favorite_card(entry: &FavoriteEntry, view: ViewMode) -> CardRecord {
    let genre_limit = match view {
        ViewMode::Grid => GRID_GENRE_LIMIT,
        ViewMode::List => usize::MAX,
    };
    CardRecord {
        id: entry.id,
        title: entry.title.clone(),
        poster: entry.poster.clone(),
        rating_label: rating_label(entry.rating),
        year_label: entry.display_year().unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        runtime_label: runtime_label(entry.runtime.as_ref()),
        genres: entry.genres.iter().take(genre_limit).cloned().collect(),
        similarity_label: None,
        overview_excerpt: None,
        is_favorite: true,
        entry: entry.clone(),
    }
}
