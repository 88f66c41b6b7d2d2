//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clipboard, downloads) from page and component logic to improve reuse and
//! testability.

pub mod clock;
pub mod debounce;
pub mod export;
pub mod format;
pub mod picks;
pub mod share;
pub mod storage;
pub mod theme;
