//! # almanac
//!
//! Calendar navigation and holiday recurrence core.
//!
//! This crate is a **façade** that re-exports the workspace members.
//! Application code should depend on this crate rather than the individual
//! `alm-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::holidays::{us, HolidayResolver};
//! use almanac::nav::{Direction, NavUnit, NavigationState, ViewMode};
//! use almanac::time::{Date, Month};
//!
//! let today = Date::from_ymd(2025, Month::December, 8).unwrap();
//!
//! let mut state = NavigationState::new(today, ViewMode::TwoWeek);
//! state.navigate(NavUnit::Week, Direction::Forward);
//! assert_eq!(state.anchor(), Date::from_ymd(2025, Month::December, 15).unwrap());
//!
//! let resolver = HolidayResolver::new(us::definitions(), today.year());
//! let thanksgiving = Date::from_ymd(2025, Month::November, 27).unwrap();
//! assert_eq!(resolver.holidays_on(thanksgiving)[0].name(), "Thanksgiving");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error types.
pub use alm_core as core;

/// Date, weekday, and month types.
pub use alm_time as time;

/// Navigation state machine.
pub use alm_nav as nav;

/// Holiday definitions, snapshots, and resolution.
pub use alm_holidays as holidays;
