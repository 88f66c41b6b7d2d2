//! Client state: persisted stores, the render synchronizer, and UI chrome.
//!
//! DESIGN
//! ======
//! `favorites`, `recommendations`, `preferences`, and `recent_searches` own
//! one or more `localStorage` records each and re-read them on every query.
//! `sync` turns their contents into display snapshots. `ui` and `toast` hold
//! transient, never-persisted presentation state.

pub mod favorites;
pub mod preferences;
pub mod recent_searches;
pub mod recommendations;
pub mod sync;
pub mod toast;
pub mod ui;
