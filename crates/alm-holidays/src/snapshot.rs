//! `HolidaySnapshot` — the three-year expansion of all definitions.

use std::collections::HashSet;

use alm_time::Date;

use crate::definition::HolidayDefinition;
use crate::occurrence::HolidayOccurrence;

/// All holiday occurrences for `[reference_year - 1, reference_year + 1]`,
/// sorted by date.
///
/// A snapshot is immutable once built and is only ever replaced wholesale —
/// never patched incrementally.  Readers hold it (or an `Arc` of it, via
/// [`HolidayResolver`](crate::HolidayResolver)) and either see the old
/// snapshot in full or the new one in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySnapshot {
    reference_year: u16,
    occurrences: Vec<HolidayOccurrence>,
}

impl HolidaySnapshot {
    /// Expand `definitions` around `reference_year`.
    ///
    /// Each definition is materialized for the previous, current, and next
    /// year; years for which it does not resolve are skipped silently and
    /// never block other definitions or years.  The result is stably sorted
    /// by occurrence date, so entries sharing a date keep the definition
    /// table's order.
    pub fn build(definitions: &[HolidayDefinition], reference_year: u16) -> Self {
        let mut occurrences = Vec::with_capacity(definitions.len() * 3);
        for definition in definitions {
            for year in reference_year.saturating_sub(1)..=reference_year.saturating_add(1) {
                if let Ok(occurrence) = HolidayOccurrence::materialize(definition, year) {
                    occurrences.push(occurrence);
                }
            }
        }
        occurrences.sort_by_key(HolidayOccurrence::date);
        HolidaySnapshot {
            reference_year,
            occurrences,
        }
    }

    /// The year this snapshot is centered on.
    pub fn reference_year(&self) -> u16 {
        self.reference_year
    }

    /// All occurrences, sorted by date.
    pub fn occurrences(&self) -> &[HolidayOccurrence] {
        &self.occurrences
    }

    /// The holidays that fall on `query`, deduplicated by name.
    ///
    /// The snapshot holds up to three yearly expansions of every recurring
    /// definition, and a recurring occurrence matches a query date from any
    /// of them (matching ignores the year).  Only the first match per name
    /// in snapshot order — the earliest-dated one — is surfaced.
    pub fn holidays_on(&self, query: Date) -> Vec<&HolidayOccurrence> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.occurrences
            .iter()
            .filter(|occ| occ.occurs_on(query))
            .filter(|occ| seen.insert(occ.name()))
            .collect()
    }
}
