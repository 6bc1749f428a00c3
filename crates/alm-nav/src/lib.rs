//! # alm-nav
//!
//! Calendar navigation state machine.
//!
//! A [`NavigationState`] owns an anchor date (the reference point of the
//! visible window), an optional selected date, and a [`ViewMode`] that
//! determines how many days are visible at once.  Navigation moves the
//! anchor by whole calendar units; selection moves keep the anchor still
//! while the selection stays inside the visible window and recenter it when
//! the selection leaves the window.
//!
//! No operation here panics or returns an error: date arithmetic that fails
//! at the calendar boundary leaves the state exactly as it was.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `NavigationState` and the navigation operations.
pub mod navigation;

/// `ViewMode` — how many days are visible, and the window geometry.
pub mod view_mode;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use navigation::{Direction, NavUnit, NavigationState};
pub use view_mode::ViewMode;
