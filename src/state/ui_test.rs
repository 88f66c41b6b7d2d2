use super::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_idle() {
    let state = UiState::default();
    assert!(state.query.is_empty());
    assert!(state.suggestions.is_none());
    assert!(!state.loading);
    assert_eq!(state.detail, DetailState::Closed);
    assert!(!state.share_open);
    assert!(!state.fab_open);
}

#[test]
fn close_menus_resets_both_flags() {
    let mut state = UiState { share_open: true, fab_open: true, ..UiState::default() };
    state.close_menus();
    assert!(!state.share_open);
    assert!(!state.fab_open);
}

// =============================================================
// Search input
// =============================================================

#[test]
fn short_query_hides_dropdown() {
    assert_eq!(input_action("a", 2), InputAction::Hide);
    assert_eq!(input_action("  a  ", 2), InputAction::Hide);
    assert_eq!(input_action("", 2), InputAction::Hide);
}

#[test]
fn long_enough_query_is_trimmed_and_fetched() {
    assert_eq!(input_action("  up ", 2), InputAction::Fetch("up".to_owned()));
}

#[test]
fn suggestions_are_capped() {
    let items: Vec<String> = (0..20).map(|i| format!("m{i}")).collect();
    let Some(s) = Suggestions::new(SuggestionHeader::Search, items, 15) else {
        panic!("expected suggestions");
    };
    assert_eq!(s.items.len(), 15);
    assert_eq!(s.items[0], "m0");
}

#[test]
fn empty_results_hide_dropdown() {
    assert_eq!(Suggestions::new(SuggestionHeader::Search, Vec::new(), 15), None);
}

#[test]
fn idle_prefers_recent_searches() {
    let s = idle_suggestions(strings(&["Heat"]), strings(&["Up"]), 15);
    assert_eq!(s.map(|s| s.header), Some(SuggestionHeader::Recent));
}

#[test]
fn idle_falls_back_to_popular() {
    let s = idle_suggestions(Vec::new(), strings(&["Up", "Heat"]), 15);
    assert_eq!(s.as_ref().map(|s| s.header), Some(SuggestionHeader::Popular));
    assert_eq!(s.map(|s| s.items.len()), Some(2));
}

// =============================================================
// DetailState
// =============================================================

#[test]
fn detail_open_states() {
    assert!(!DetailState::Closed.is_open());
    assert!(DetailState::Loading.is_open());
    assert!(DetailState::Failed.is_open());
}

// =============================================================
// Recommendation notices
// =============================================================

#[test]
fn empty_result_set_is_a_warning() {
    let (kind, message) = recommendations_notice("Inception", 0);
    assert_eq!(kind, ToastKind::Warning);
    assert_eq!(message, "No recommendations found for \"Inception\"");
}

#[test]
fn non_empty_result_set_is_a_success_with_count() {
    assert_eq!(recommendations_notice("Inception", 12), (ToastKind::Success, "Found 12 recommendations!".to_owned()));
    assert_eq!(recommendations_notice("Inception", 1).1, "Found 1 recommendation!");
}
