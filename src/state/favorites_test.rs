use std::rc::Rc;

use super::*;
use crate::util::clock::ManualClock;
use crate::util::storage::{KeyValueStore, MemoryStorage};

// =============================================================
// Helpers
// =============================================================

fn fixture() -> (MemoryStorage, Rc<ManualClock>, FavoritesStore) {
    let storage = MemoryStorage::new();
    let clock = Rc::new(ManualClock::new(1_000));
    let store = FavoritesStore::new(Rc::new(storage.clone()), clock.clone());
    (storage, clock, store)
}

fn entry(id: i64, title: &str) -> FavoriteEntry {
    FavoriteEntry {
        id,
        title: title.to_owned(),
        poster: format!("https://image.example/{id}.jpg"),
        rating: None,
        year: None,
        release_date: None,
        runtime: None,
        genres: Vec::new(),
        added_at: None,
    }
}

fn ids(list: &[FavoriteEntry]) -> Vec<i64> {
    list.iter().map(|f| f.id).collect()
}

// =============================================================
// Store
// =============================================================

#[test]
fn list_is_empty_initially() {
    let (_, _, store) = fixture();
    assert!(store.list().is_empty());
    assert_eq!(store.count(), 0);
}

#[test]
fn add_stamps_current_time_and_appends() {
    let (_, clock, store) = fixture();
    assert!(store.add(entry(1, "A")));
    clock.advance(50);
    assert!(store.add(entry(2, "B")));

    let list = store.list();
    assert_eq!(ids(&list), vec![1, 2]);
    assert_eq!(list[0].added_at, Some(1_000));
    assert_eq!(list[1].added_at, Some(1_050));
}

#[test]
fn add_existing_id_is_idempotent() {
    let (_, clock, store) = fixture();
    store.add(entry(1, "A"));
    let before = store.list();
    clock.advance(10);
    assert!(!store.add(entry(1, "A again")));
    assert_eq!(store.list(), before);
}

#[test]
fn remove_missing_id_is_noop() {
    let (_, _, store) = fixture();
    store.add(entry(1, "A"));
    assert!(!store.remove(99));
    assert_eq!(store.count(), 1);
    assert!(store.remove(1));
    assert!(!store.is_member(1));
}

#[test]
fn toggle_twice_restores_initial_list() {
    let (_, _, store) = fixture();
    store.add(entry(1, "A"));
    store.add(entry(2, "B"));
    let initial = store.list();

    assert!(store.toggle(entry(3, "C")));
    assert!(store.is_member(3));
    assert!(!store.toggle(entry(3, "C")));
    assert_eq!(store.list(), initial);
}

#[test]
fn clear_persists_empty_list() {
    let (storage, _, store) = fixture();
    store.add(entry(1, "A"));
    store.clear();
    assert!(store.list().is_empty());
    assert_eq!(storage.get(StorageKey::Favorites.as_str()).as_deref(), Some("[]"));
}

#[test]
fn undefined_literal_reads_empty_and_purges() {
    let (storage, _, store) = fixture();
    storage.set(StorageKey::Favorites.as_str(), "undefined");
    assert!(store.list().is_empty());
    assert!(!storage.contains(StorageKey::Favorites.as_str()));
}

#[test]
fn legacy_record_with_numeric_year_decodes() {
    let (storage, _, store) = fixture();
    storage.set(
        StorageKey::Favorites.as_str(),
        r#"[{"id":7,"title":"Heat","poster":"p","rating":null,"year":1995,"release_date":null,"runtime":null,"genres":[],"addedAt":5}]"#,
    );
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].year.as_deref(), Some("1995"));
    assert_eq!(list[0].added_at, Some(5));
}

#[test]
fn duplicate_ids_in_storage_keep_first_entry() {
    let (storage, _, store) = fixture();
    storage.set(StorageKey::Favorites.as_str(), r#"[{"id":1,"title":"First"},{"id":1,"title":"Second"}]"#);
    let list = store.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "First");
}

#[test]
fn writes_from_another_handle_are_visible() {
    let (storage, clock, store) = fixture();
    let other_tab = FavoritesStore::new(Rc::new(storage.clone()), clock);
    other_tab.add(entry(4, "D"));
    assert!(store.is_member(4));
}

#[test]
fn export_json_is_pretty_list() {
    let (_, _, store) = fixture();
    store.add(entry(1, "A"));
    let exported = store.export_json();
    assert!(exported.contains('\n'));
    let parsed: Vec<FavoriteEntry> = serde_json::from_str(&exported).unwrap();
    assert_eq!(ids(&parsed), vec![1]);
}

// =============================================================
// Entry helpers
// =============================================================

#[test]
fn from_movie_copies_display_fields() {
    let movie: MovieSummary = serde_json::from_value(serde_json::json!({
        "id": 5, "title": "Alien", "poster": "p", "rating": 8.5,
        "release_date": "1979-05-25", "runtime": 117, "genres": ["Horror"], "similarity": 70.0
    }))
    .unwrap();
    let fav = FavoriteEntry::from_movie(&movie);
    assert_eq!(fav.id, 5);
    assert_eq!(fav.year.as_deref(), Some("1979"));
    assert_eq!(fav.runtime, Some(Runtime::Minutes(117)));
    assert_eq!(fav.added_at, None);
}

#[test]
fn display_year_falls_back_to_release_date() {
    let mut fav = entry(1, "A");
    fav.release_date = Some("2001-09-01".to_owned());
    assert_eq!(fav.display_year().as_deref(), Some("2001"));
    fav.year = Some("1999".to_owned());
    assert_eq!(fav.display_year().as_deref(), Some("1999"));
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_recent_and_title_example() {
    let mut a = entry(1, "A");
    a.added_at = Some(100);
    let mut b = entry(2, "B");
    b.added_at = Some(200);
    let list = vec![a, b];

    assert_eq!(ids(&sort_favorites(&list, FavoritesSort::Recent)), vec![2, 1]);
    assert_eq!(ids(&sort_favorites(&list, FavoritesSort::Title)), vec![1, 2]);
}

#[test]
fn sort_recent_puts_missing_timestamps_last() {
    let mut a = entry(1, "A");
    a.added_at = None;
    let mut b = entry(2, "B");
    b.added_at = Some(10);
    assert_eq!(ids(&sort_favorites(&[a, b], FavoritesSort::Recent)), vec![2, 1]);
}

#[test]
fn sort_title_desc_reverses_title() {
    let list: Vec<FavoriteEntry> = ["Heat", "alien", "Brazil", "Zodiac"]
        .iter()
        .enumerate()
        .map(|(i, t)| entry(i64::try_from(i).unwrap(), t))
        .collect();
    let asc = ids(&sort_favorites(&list, FavoritesSort::Title));
    let mut desc = ids(&sort_favorites(&list, FavoritesSort::TitleDesc));
    desc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn sort_rating_treats_missing_as_zero_and_is_stable() {
    let mut a = entry(1, "A");
    a.rating = Some(7.0);
    let b = entry(2, "B");
    let mut c = entry(3, "C");
    c.rating = Some(7.0);
    let list = vec![a, b, c];

    assert_eq!(ids(&sort_favorites(&list, FavoritesSort::Rating)), vec![1, 3, 2]);
    assert_eq!(ids(&sort_favorites(&list, FavoritesSort::RatingLow)), vec![2, 1, 3]);
}

#[test]
fn sort_does_not_touch_storage_order() {
    let (_, clock, store) = fixture();
    store.add(entry(1, "Zed"));
    clock.advance(1);
    store.add(entry(2, "Abe"));
    let _ = sort_favorites(&store.list(), FavoritesSort::Title);
    assert_eq!(ids(&store.list()), vec![1, 2]);
}

#[test]
fn favorites_sort_parse_round_trips() {
    for mode in FavoritesSort::ALL {
        assert_eq!(FavoritesSort::parse(mode.as_str()), Some(mode));
    }
    assert_eq!(FavoritesSort::parse("similarity"), None);
    assert_eq!(FavoritesSort::default(), FavoritesSort::Recent);
}
