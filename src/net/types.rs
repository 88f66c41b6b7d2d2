//! Wire DTOs for the recommendation API.
//!
//! DESIGN
//! ======
//! These mirror the JSON the API emits, including its loose spots: `runtime`
//! is either integer minutes or a marker string like `"N/A"`, and ids may
//! arrive as integral floats. Everything optional defaults so a sparse record
//! still decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A movie as listed in search results, recommendation sets, and favorites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream movie identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    /// Poster image URL.
    #[serde(default)]
    pub poster: String,
    /// Average rating on a 0-10 scale.
    #[serde(default)]
    pub rating: Option<f64>,
    /// `YYYY-MM-DD`, or `"N/A"` when unknown.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub overview: Option<String>,
    /// Match percentage; present only on recommendation results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl MovieSummary {
    /// Year component of `release_date`, if it parses.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.as_deref().and_then(parse_year)
    }
}

/// Runtime as sent by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Runtime {
    Minutes(u32),
    Text(String),
}

impl Runtime {
    /// Positive minute count; `None` for zero or marker text.
    #[must_use]
    pub fn minutes(&self) -> Option<u32> {
        match self {
            Self::Minutes(0) => None,
            Self::Minutes(m) => Some(*m),
            Self::Text(text) => text.trim().parse::<u32>().ok().filter(|m| *m > 0),
        }
    }
}

/// Full detail record from `/api/movie/<id>/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub backdrop: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub runtime: Option<Runtime>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Director name; the API sends `"N/A"` when credits are missing.
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Vec<String>,
}

impl MovieDetail {
    /// Backdrop URL, falling back to the poster.
    #[must_use]
    pub fn hero_image(&self) -> &str {
        self.backdrop
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(&self.poster)
    }

    /// Director name unless the API reported it as unknown.
    #[must_use]
    pub fn known_director(&self) -> Option<&str> {
        self.director
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty() && *d != "N/A")
    }
}

/// Response body of `/api/search/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<String>,
}

/// Response body of `/api/recommendations/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<MovieSummary>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Leading `-`-separated component of a date string as a year.
#[must_use]
pub fn parse_year(date: &str) -> Option<i32> {
    date.split('-').next().and_then(|y| y.trim().parse::<i32>().ok())
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
