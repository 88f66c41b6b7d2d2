//! Local UI chrome state (search box, suggestions, loading, detail modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the persisted stores so the
//! controls can evolve independently of storage. One `RwSignal<UiState>` is
//! provided as context; the decision helpers here are pure so the search
//! flow can be tested without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::net::types::MovieDetail;
use crate::state::toast::ToastKind;

/// Which list the suggestion dropdown is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionHeader {
    Search,
    Popular,
    Recent,
}

impl SuggestionHeader {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search Results",
            Self::Popular => "Popular Movies",
            Self::Recent => "Recent Searches",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Search => "fas fa-search",
            Self::Popular => "fas fa-fire",
            Self::Recent => "fas fa-history",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestions {
    pub header: SuggestionHeader,
    pub items: Vec<String>,
}

impl Suggestions {
    /// Build a dropdown of at most `limit` items. Empty input hides it.
    #[must_use]
    pub fn new(header: SuggestionHeader, mut items: Vec<String>, limit: usize) -> Option<Self> {
        items.truncate(limit);
        if items.is_empty() { None } else { Some(Self { header, items }) }
    }
}

/// What the live-search input should do for the current text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    Hide,
    Fetch(String),
}

/// Typed input: queries shorter than `min_len` hide the dropdown.
#[must_use]
pub fn input_action(raw: &str, min_len: usize) -> InputAction {
    let query = raw.trim();
    if query.chars().count() < min_len {
        InputAction::Hide
    } else {
        InputAction::Fetch(query.to_owned())
    }
}

/// Focused input with a short query: recent searches, else the popular list.
#[must_use]
pub fn idle_suggestions(recent: Vec<String>, popular: Vec<String>, limit: usize) -> Option<Suggestions> {
    Suggestions::new(SuggestionHeader::Recent, recent, limit)
        .or_else(|| Suggestions::new(SuggestionHeader::Popular, popular, limit))
}

/// Movie detail modal lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Closed,
    Loading,
    Loaded(Box<MovieDetail>),
    Failed,
}

impl DetailState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub query: String,
    pub suggestions: Option<Suggestions>,
    /// A recommendation request is in flight.
    pub loading: bool,
    pub detail: DetailState,
    pub share_open: bool,
    pub fab_open: bool,
}

impl UiState {
    pub fn hide_suggestions(&mut self) {
        self.suggestions = None;
    }

    pub fn close_menus(&mut self) {
        self.share_open = false;
        self.fab_open = false;
    }
}

/// Toast for a finished recommendation request returning `count` movies.
/// An empty set is a warning, not a success.
#[must_use]
pub fn recommendations_notice(title: &str, count: usize) -> (ToastKind, String) {
    match count {
        0 => (ToastKind::Warning, format!("No recommendations found for \"{title}\"")),
        1 => (ToastKind::Success, "Found 1 recommendation!".to_owned()),
        n => (ToastKind::Success, format!("Found {n} recommendations!")),
    }
}
