use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_empty() {
    let cfg = ClientConfig::from_lookup(|_| None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.debounce_ms, 300);
    assert_eq!(cfg.cache_ttl_ms, 86_400_000);
    assert_eq!(cfg.max_recent, 5);
    assert_eq!(cfg.suggestion_limit, 15);
    assert_eq!(cfg.min_query_len, 2);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("CINEMATCH_API_BASE", "https://movies.example.test/"),
        ("CINEMATCH_DEBOUNCE_MS", "150"),
        ("CINEMATCH_CACHE_TTL_MS", "60000"),
        ("CINEMATCH_MAX_RECENT", " 8 "),
        ("CINEMATCH_TOAST_MS", "1000"),
    ]));
    assert_eq!(cfg.api_base, "https://movies.example.test");
    assert_eq!(cfg.debounce_ms, 150);
    assert_eq!(cfg.cache_ttl_ms, 60_000);
    assert_eq!(cfg.max_recent, 8);
    assert_eq!(cfg.toast_ms, 1000);
    assert_eq!(cfg.suggestion_limit, DEFAULT_SUGGESTION_LIMIT);
}

#[test]
fn from_lookup_ignores_unparsable_numbers() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("CINEMATCH_DEBOUNCE_MS", "soon"), ("CINEMATCH_MAX_RECENT", "-1")]));
    assert_eq!(cfg.debounce_ms, DEFAULT_DEBOUNCE_MS);
    assert_eq!(cfg.max_recent, DEFAULT_MAX_RECENT);
}

#[test]
fn data_attribute_name_is_kebab_case() {
    assert_eq!(data_attribute_name("CINEMATCH_API_BASE"), "data-cinematch-api-base");
}
