//! `HolidayDefinition` — the abstract holiday template.

use alm_core::errors::Result;
use alm_time::{Date, Month, Weekday};

/// How a holiday recurs.
///
/// Floating holidays carry their rule as data, so adding one (e.g. a new
/// "second Sunday of May" entry) needs a configuration entry, not a code
/// branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recurrence {
    /// A single exact occurrence; does not repeat.
    OneTime(Date),
    /// The same month and day every year.
    FixedDate {
        /// Month of the occurrence.
        month: Month,
        /// Day of the month (1–31).
        day: u8,
    },
    /// The *n*-th given weekday of a month every year
    /// (Thanksgiving: 4th Thursday of November).
    NthWeekday {
        /// Month of the occurrence.
        month: Month,
        /// Weekday the rule selects.
        weekday: Weekday,
        /// Which occurrence of the weekday (1-based).
        nth: u8,
    },
}

/// Category tag carried through to occurrences for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayCategory {
    /// Federal / public holidays.
    Federal,
    /// Cultural celebrations.
    Cultural,
    /// Seasonal markers.
    Seasonal,
    /// Minor observances.
    Observance,
}

/// An abstract holiday template.
///
/// The `name` doubles as the identity used for deduplication; display
/// metadata (`emoji`, `description`) is opaque to resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayDefinition {
    /// Unique display name ("Thanksgiving").
    pub name: String,
    /// When the holiday occurs.
    pub recurrence: Recurrence,
    /// Category tag.
    pub category: HolidayCategory,
    /// Display emoji; not used by resolution.
    #[cfg_attr(feature = "serde", serde(default))]
    pub emoji: String,
    /// Display description; not used by resolution.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl HolidayDefinition {
    /// Create a definition with empty display metadata.
    pub fn new(
        name: impl Into<String>,
        recurrence: Recurrence,
        category: HolidayCategory,
    ) -> Self {
        HolidayDefinition {
            name: name.into(),
            recurrence,
            category,
            emoji: String::new(),
            description: String::new(),
        }
    }

    /// Attach a display emoji.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Attach a display description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this definition repeats every year.
    pub fn is_recurring(&self) -> bool {
        !matches!(self.recurrence, Recurrence::OneTime(_))
    }

    /// The concrete date of this holiday in `year`.
    ///
    /// One-time definitions return their stored date unconditionally (the
    /// year argument is ignored).  Recurring definitions build the date for
    /// the requested year; an error means the holiday simply does not occur
    /// that year (February 29 in a non-leap year), which callers treat as
    /// absence, not failure.
    pub fn date_in_year(&self, year: u16) -> Result<Date> {
        match self.recurrence {
            Recurrence::OneTime(date) => Ok(date),
            Recurrence::FixedDate { month, day } => Date::from_ymd(year, month, day),
            Recurrence::NthWeekday {
                month,
                weekday,
                nth,
            } => Date::nth_weekday(nth, weekday, year, month),
        }
    }
}
