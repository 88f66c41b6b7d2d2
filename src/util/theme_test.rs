use std::rc::Rc;

use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage, StorageKey};

#[test]
fn init_defaults_to_dark() {
    let prefs = PreferenceStore::new(Rc::new(MemoryStorage::new()));
    assert_eq!(init(&prefs), Theme::Dark);
}

#[test]
fn toggle_flips_and_persists() {
    let storage = MemoryStorage::new();
    let prefs = PreferenceStore::new(Rc::new(storage.clone()));

    assert_eq!(toggle(&prefs), Theme::Light);
    assert_eq!(storage.get(StorageKey::Theme.as_str()).as_deref(), Some("light"));
    assert_eq!(toggle(&prefs), Theme::Dark);
    assert_eq!(init(&prefs), Theme::Dark);
}

#[test]
fn icon_matches_theme() {
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
