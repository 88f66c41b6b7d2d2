//! Display formatting shared by cards, the detail modal, and sorting.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::cmp::Ordering;

use crate::net::types::Runtime;

/// Shown where a rating or year is unknown.
pub const NOT_AVAILABLE: &str = "N/A";

/// Poster used when the API has none or the image fails to load.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750?text=No+Poster";

/// Locale-aware title ordering with a raw-string tie-break, so the order is
/// total and `compare_titles(b, a)` is its exact reverse.
///
/// The browser build defers to `String.prototype.localeCompare`. Native
/// builds approximate it by folding accents and case before comparing.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    #[cfg(feature = "csr")]
    let primary = js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0);
    #[cfg(not(feature = "csr"))]
    let primary = collation_key(a).cmp(&collation_key(b));
    primary.then_with(|| a.cmp(b))
}

/// Lowercased title with combining marks stripped after canonical
/// decomposition: `"Éclair"` folds to `"eclair"`.
#[cfg(any(test, not(feature = "csr")))]
fn collation_key(title: &str) -> String {
    use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

    title.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

/// One decimal place, or `N/A` for missing and zero ratings.
#[must_use]
pub fn rating_label(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r > 0.0 => format!("{r:.1}"),
        _ => NOT_AVAILABLE.to_owned(),
    }
}

/// Year portion of a `YYYY-MM-DD` string, or `N/A`.
#[must_use]
pub fn year_label(release_date: Option<&str>) -> String {
    release_date
        .and_then(|d| d.split('-').next())
        .map(str::trim)
        .filter(|y| !y.is_empty())
        .map_or_else(|| NOT_AVAILABLE.to_owned(), str::to_owned)
}

/// `"148m"`, or `None` when the runtime is unknown.
#[must_use]
pub fn runtime_label(runtime: Option<&Runtime>) -> Option<String> {
    runtime.and_then(Runtime::minutes).map(|m| format!("{m}m"))
}

/// Match badge text such as `"87.35% Match"`.
#[must_use]
pub fn similarity_label(similarity: Option<f64>) -> Option<String> {
    similarity
        .filter(|s| *s > 0.0)
        .map(|s| format!("{}% Match", trim_float(s)))
}

/// Five-slot star row from a 0-10 rating: `true` for a filled star.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn star_slots(rating: f64) -> [bool; 5] {
    let filled = (rating / 2.0).round().clamp(0.0, 5.0) as usize;
    let mut slots = [false; 5];
    for slot in slots.iter_mut().take(filled) {
        *slot = true;
    }
    slots
}

/// Truncate to `max_chars` characters, appending `...` when cut.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

fn trim_float(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
