//! Recommendation cache: the last successful result set, kept for 24 hours.
//!
//! DESIGN
//! ======
//! Movies, source movie, and timestamp are three independent records. A
//! corrupt source-movie record only drops the "based on" title; a corrupt or
//! missing movies/timestamp record, or an expired timestamp, invalidates the
//! whole entry. Every invalid outcome purges all three records so the next
//! page load starts clean.

#[cfg(test)]
#[path = "recommendations_test.rs"]
mod recommendations_test;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CACHE_TTL_MS;
use crate::net::types::MovieSummary;
use crate::util::clock::Clock;
use crate::util::format::compare_titles;
use crate::util::storage::{SharedStore, StorageKey, is_null_literal, read_json, write_json};

/// The movie a recommendation set was derived from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMovie {
    pub title: String,
}

/// A fresh cache entry.
#[derive(Clone, Debug, PartialEq)]
pub struct CachedRecommendations {
    pub movies: Vec<MovieSummary>,
    pub source_movie: Option<SourceMovie>,
    pub created_at: i64,
}

/// Sort order for recommendation results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecommendationSort {
    #[default]
    Similarity,
    Rating,
    RatingLow,
    Title,
    TitleDesc,
    Year,
    YearOld,
}

impl RecommendationSort {
    pub const ALL: [RecommendationSort; 7] = [
        RecommendationSort::Similarity,
        RecommendationSort::Rating,
        RecommendationSort::RatingLow,
        RecommendationSort::Title,
        RecommendationSort::TitleDesc,
        RecommendationSort::Year,
        RecommendationSort::YearOld,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::Rating => "rating",
            Self::RatingLow => "rating-low",
            Self::Title => "title",
            Self::TitleDesc => "title-desc",
            Self::Year => "year",
            Self::YearOld => "year-old",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Similarity => "Best Match",
            Self::Rating => "Highest Rated",
            Self::RatingLow => "Lowest Rated",
            Self::Title => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::Year => "Newest First",
            Self::YearOld => "Oldest First",
        }
    }
}

/// Stable display ordering; the input is left untouched.
#[must_use]
pub fn sort_movies(movies: &[MovieSummary], mode: RecommendationSort) -> Vec<MovieSummary> {
    let mut sorted = movies.to_vec();
    match mode {
        RecommendationSort::Similarity => sorted.sort_by(|a, b| {
            b.similarity
                .unwrap_or(0.0)
                .total_cmp(&a.similarity.unwrap_or(0.0))
        }),
        RecommendationSort::Rating => sorted.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0))),
        RecommendationSort::RatingLow => {
            sorted.sort_by(|a, b| a.rating.unwrap_or(0.0).total_cmp(&b.rating.unwrap_or(0.0)));
        }
        RecommendationSort::Title => sorted.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        RecommendationSort::TitleDesc => sorted.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        RecommendationSort::Year => sorted.sort_by_key(|m| std::cmp::Reverse(year_or_zero(m))),
        RecommendationSort::YearOld => sorted.sort_by_key(year_or_zero),
    }
    sorted
}

fn year_or_zero(movie: &MovieSummary) -> i32 {
    movie.release_year().unwrap_or(0)
}

/// Persisted last-result cache with a freshness window.
#[derive(Clone)]
pub struct RecommendationCache {
    store: SharedStore,
    clock: Rc<dyn Clock>,
    ttl_ms: i64,
}

impl RecommendationCache {
    pub fn new(store: SharedStore, clock: Rc<dyn Clock>) -> Self {
        Self::with_ttl(store, clock, DEFAULT_CACHE_TTL_MS)
    }

    pub fn with_ttl(store: SharedStore, clock: Rc<dyn Clock>, ttl_ms: i64) -> Self {
        Self { store, clock, ttl_ms }
    }

    /// Persist a result set stamped with the current time. A `None` source
    /// leaves any previously stored source record in place.
    pub fn save(&self, movies: &[MovieSummary], source: Option<&SourceMovie>) {
        write_json(&*self.store, StorageKey::RecommendedMovies, movies);
        if let Some(source) = source {
            write_json(&*self.store, StorageKey::SourceMovie, source);
        }
        self.store
            .set(StorageKey::RecommendationsTimestamp.as_str(), &self.clock.now_ms().to_string());
        log::debug!("cached {} recommendations", movies.len());
    }

    /// The cached entry if present, well-formed, non-empty, and fresh.
    /// Any other outcome purges the cache and returns `None`.
    #[must_use]
    pub fn load(&self) -> Option<CachedRecommendations> {
        match self.load_inner() {
            Ok(entry) => Some(entry),
            Err(reason) => {
                log::info!("recommendation cache unavailable: {reason}");
                self.clear();
                None
            }
        }
    }

    /// Remove all three records.
    pub fn clear(&self) {
        self.store.remove(StorageKey::RecommendedMovies.as_str());
        self.store.remove(StorageKey::SourceMovie.as_str());
        self.store.remove(StorageKey::RecommendationsTimestamp.as_str());
    }

    fn load_inner(&self) -> Result<CachedRecommendations, String> {
        let raw_movies = self
            .store
            .get(StorageKey::RecommendedMovies.as_str())
            .filter(|raw| !raw.trim().is_empty() && !is_null_literal(raw))
            .ok_or_else(|| "no stored movies".to_owned())?;

        let created_at = self
            .store
            .get(StorageKey::RecommendationsTimestamp.as_str())
            .and_then(|raw| parse_timestamp(&raw))
            .ok_or_else(|| "missing or invalid timestamp".to_owned())?;

        let now = self.clock.now_ms();
        if created_at > now {
            return Err(format!("timestamp {created_at} is in the future"));
        }
        let age = now
            .checked_sub(created_at)
            .ok_or_else(|| format!("timestamp {created_at} out of range"))?;
        if age > self.ttl_ms {
            return Err(format!("expired ({age}ms old)"));
        }

        let movies: Vec<MovieSummary> =
            serde_json::from_str(&raw_movies).map_err(|e| format!("malformed movies: {e}"))?;
        if movies.is_empty() {
            return Err("empty result set".to_owned());
        }

        let source_movie = match read_json::<SourceMovie>(&*self.store, StorageKey::SourceMovie) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("{e}; dropping source movie");
                self.store.remove(StorageKey::SourceMovie.as_str());
                None
            }
        };

        Ok(CachedRecommendations { movies, source_movie, created_at })
    }
}

/// Non-negative whole milliseconds. Floats are accepted only when they are
/// integral and fit in `i64`; anything else is unparsable.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if is_null_literal(raw) {
        return None;
    }
    raw.parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        })
        .filter(|ms| *ms >= 0)
}
