//! `HolidayResolver` — owns the definitions and the current snapshot.

use std::sync::Arc;

use alm_time::Date;

use crate::definition::HolidayDefinition;
use crate::occurrence::HolidayOccurrence;
use crate::snapshot::HolidaySnapshot;

/// Owns a set of holiday definitions and the snapshot expanded from them.
///
/// The snapshot is published behind an `Arc`: rebuilding produces a new
/// immutable snapshot and swaps the reference in one assignment, so readers
/// holding a clone from [`snapshot`](HolidayResolver::snapshot) keep the
/// version they were handed and never observe a partially built one.
#[derive(Debug, Clone)]
pub struct HolidayResolver {
    definitions: Vec<HolidayDefinition>,
    snapshot: Arc<HolidaySnapshot>,
}

impl HolidayResolver {
    /// Create a resolver and build the initial snapshot around
    /// `reference_year`.
    pub fn new(definitions: Vec<HolidayDefinition>, reference_year: u16) -> Self {
        let snapshot = Arc::new(HolidaySnapshot::build(&definitions, reference_year));
        HolidayResolver {
            definitions,
            snapshot,
        }
    }

    /// The definitions this resolver expands.
    pub fn definitions(&self) -> &[HolidayDefinition] {
        &self.definitions
    }

    /// A handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<HolidaySnapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Rebuild the snapshot if `year` differs from its reference year.
    ///
    /// Call on year rollover (or whenever the displayed year changes); a
    /// matching year is a no-op and keeps the existing snapshot.
    pub fn ensure_year(&mut self, year: u16) {
        if year != self.snapshot.reference_year() {
            self.snapshot = Arc::new(HolidaySnapshot::build(&self.definitions, year));
        }
    }

    /// Replace the definition table and rebuild around the current
    /// reference year.
    pub fn set_definitions(&mut self, definitions: Vec<HolidayDefinition>) {
        let year = self.snapshot.reference_year();
        self.definitions = definitions;
        self.snapshot = Arc::new(HolidaySnapshot::build(&self.definitions, year));
    }

    /// The holidays falling on `query`, deduplicated by name.
    pub fn holidays_on(&self, query: Date) -> Vec<&HolidayOccurrence> {
        self.snapshot.holidays_on(query)
    }
}
