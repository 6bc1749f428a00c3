//! `HolidayOccurrence` — a definition materialized for one concrete year.

use alm_core::errors::Result;
use alm_time::Date;

use crate::definition::{HolidayCategory, HolidayDefinition};

/// One concrete occurrence of a holiday.
///
/// Produced by [`HolidaySnapshot::build`](crate::HolidaySnapshot::build) and
/// never mutated afterwards; the snapshot owns its occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayOccurrence {
    name: String,
    date: Date,
    recurring: bool,
    category: HolidayCategory,
}

impl HolidayOccurrence {
    /// Materialize `definition` for `year`.
    ///
    /// Fails when the definition has no occurrence in that year.
    pub(crate) fn materialize(definition: &HolidayDefinition, year: u16) -> Result<Self> {
        let date = definition.date_in_year(year)?;
        Ok(HolidayOccurrence {
            name: definition.name.clone(),
            date,
            recurring: definition.is_recurring(),
            category: definition.category,
        })
    }

    /// The holiday's name (its deduplication identity).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The concrete occurrence date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Whether the underlying definition recurs yearly.
    pub fn is_recurring(&self) -> bool {
        self.recurring
    }

    /// The category tag carried over from the definition.
    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    /// Whether this occurrence falls on `query`.
    ///
    /// Recurring occurrences match on month and day alone, ignoring the
    /// year entirely — the occurrence stands in for "every year on this
    /// month/day".  One-time occurrences require the exact calendar day.
    pub fn occurs_on(&self, query: Date) -> bool {
        if self.recurring {
            self.date.month() == query.month() && self.date.day() == query.day()
        } else {
            self.date == query
        }
    }
}
