use std::rc::Rc;

use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn push_recent_moves_duplicate_to_front() {
    let list = strings(&["Alien", "Heat", "Up"]);
    assert_eq!(push_recent(&list, "Heat", 5), strings(&["Heat", "Alien", "Up"]));
}

#[test]
fn push_recent_caps_length() {
    let list = strings(&["a", "b", "c", "d", "e"]);
    assert_eq!(push_recent(&list, "f", 5), strings(&["f", "a", "b", "c", "d"]));
}

#[test]
fn push_recent_dedupes_by_exact_match_only() {
    let list = strings(&["heat"]);
    assert_eq!(push_recent(&list, "Heat", 5), strings(&["Heat", "heat"]));
}

#[test]
fn record_persists_most_recent_first() {
    let storage = MemoryStorage::new();
    let recent = RecentSearches::new(Rc::new(storage.clone()));
    for title in ["A", "B", "C", "D", "E", "F", "B"] {
        recent.record(title);
    }
    assert_eq!(recent.list(), strings(&["B", "F", "E", "D", "C"]));
    assert!(storage.contains(StorageKey::RecentSearches.as_str()));
}

#[test]
fn record_ignores_blank_titles() {
    let recent = RecentSearches::new(Rc::new(MemoryStorage::new()));
    recent.record("   ");
    assert!(recent.list().is_empty());
}

#[test]
fn malformed_record_reads_empty() {
    let storage = MemoryStorage::new();
    storage.set(StorageKey::RecentSearches.as_str(), "null");
    let recent = RecentSearches::new(Rc::new(storage.clone()));
    assert!(recent.list().is_empty());
    assert!(!storage.contains(StorageKey::RecentSearches.as_str()));
}

#[test]
fn clear_removes_record() {
    let recent = RecentSearches::new(Rc::new(MemoryStorage::new()));
    recent.record("Alien");
    recent.clear();
    assert!(recent.list().is_empty());
}
