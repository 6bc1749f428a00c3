//! # alm-time
//!
//! Gregorian date arithmetic for the almanac workspace.
//!
//! This crate is the host-calendar capability the navigation and holiday
//! layers are built on: fallible date construction from components,
//! component extraction (year, month, day, weekday), fallible signed
//! offset arithmetic in days/weeks/months/years, and calendar-day equality
//! (plain `==`, since a [`Date`] carries no time of day).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
