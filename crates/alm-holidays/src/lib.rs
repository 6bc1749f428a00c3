//! # alm-holidays
//!
//! Holiday recurrence resolution.
//!
//! A [`HolidayDefinition`] is an abstract template: a one-time date, a fixed
//! month/day recurring every year, or an "nth weekday of month" floating
//! rule.  The resolver expands definitions into concrete
//! [`HolidayOccurrence`]s for a three-year window around a reference year
//! (the [`HolidaySnapshot`]) and answers "which holidays fall on this date"
//! with per-name deduplication.
//!
//! A definition that cannot be resolved for some year (February 29 in a
//! non-leap year, a fifth Thursday that does not exist) is simply absent
//! from the snapshot for that year; it never blocks other definitions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayDefinition`, `Recurrence`, and `HolidayCategory`.
pub mod definition;

/// `HolidayOccurrence` — a definition materialized for one year.
pub mod occurrence;

/// `HolidayResolver` — owns the current snapshot and swaps it wholesale.
pub mod resolver;

/// `HolidaySnapshot` — the three-year expansion.
pub mod snapshot;

/// Built-in United States holiday table.
pub mod us;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use definition::{HolidayCategory, HolidayDefinition, Recurrence};
pub use occurrence::HolidayOccurrence;
pub use resolver::HolidayResolver;
pub use snapshot::HolidaySnapshot;
