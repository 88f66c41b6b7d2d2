//! Client configuration.
//!
//! Values are looked up by `CINEMATCH_*` name. In the browser the lookup reads
//! `data-cinematch-*` attributes on the `<html>` element so the page template
//! can point the client at a different API origin; native builds read the
//! process environment. Anything missing or unparsable keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "";
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;
pub const DEFAULT_MAX_RECENT: usize = 5;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prefix for `/api/...` paths; empty means same-origin.
    pub api_base: String,
    pub debounce_ms: u32,
    /// Freshness window for the cached recommendation set.
    pub cache_ttl_ms: i64,
    pub max_recent: usize,
    pub suggestion_limit: usize,
    pub min_query_len: usize,
    pub toast_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            max_recent: DEFAULT_MAX_RECENT,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            toast_ms: DEFAULT_TOAST_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from a key lookup.
    ///
    /// Keys:
    /// - `CINEMATCH_API_BASE`: default same-origin
    /// - `CINEMATCH_DEBOUNCE_MS`: default 300
    /// - `CINEMATCH_CACHE_TTL_MS`: default 24h
    /// - `CINEMATCH_MAX_RECENT`: default 5
    /// - `CINEMATCH_SUGGESTION_LIMIT`: default 15
    /// - `CINEMATCH_MIN_QUERY_LEN`: default 2
    /// - `CINEMATCH_TOAST_MS`: default 3000
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("CINEMATCH_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        Self {
            api_base,
            debounce_ms: parse_or(&lookup, "CINEMATCH_DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS),
            cache_ttl_ms: parse_or(&lookup, "CINEMATCH_CACHE_TTL_MS", DEFAULT_CACHE_TTL_MS),
            max_recent: parse_or(&lookup, "CINEMATCH_MAX_RECENT", DEFAULT_MAX_RECENT),
            suggestion_limit: parse_or(&lookup, "CINEMATCH_SUGGESTION_LIMIT", DEFAULT_SUGGESTION_LIMIT),
            min_query_len: parse_or(&lookup, "CINEMATCH_MIN_QUERY_LEN", DEFAULT_MIN_QUERY_LEN),
            toast_ms: parse_or(&lookup, "CINEMATCH_TOAST_MS", DEFAULT_TOAST_MS),
        }
    }

    /// Load config from the running environment.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            Self::from_lookup(|key| {
                let attr = data_attribute_name(key);
                root.as_ref().and_then(|el| el.get_attribute(&attr))
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }
}

/// `CINEMATCH_API_BASE` -> `data-cinematch-api-base`.
pub fn data_attribute_name(key: &str) -> String {
    format!("data-{}", key.to_ascii_lowercase().replace('_', "-"))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
