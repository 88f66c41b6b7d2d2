//! Color theme initialization and toggle.
//!
//! Reads the stored theme (dark unless the user picked light) and applies it
//! as a `data-theme` attribute on the `<html>` element. Toggle writes the new
//! theme back through the preference store. Applying is a no-op outside the
//! browser build.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::preferences::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Font Awesome icon for the toggle button.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }
}

/// Apply the stored theme and return it.
pub fn init(prefs: &PreferenceStore) -> Theme {
    let theme = prefs.theme();
    apply(theme);
    theme
}

/// Set the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the stored theme, apply it, and return the new value.
pub fn toggle(prefs: &PreferenceStore) -> Theme {
    let next = prefs.theme().toggled();
    prefs.set_theme(next);
    apply(next);
    next
}
