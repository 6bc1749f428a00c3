//! `ViewMode` — the set of calendar layouts and their window geometry.

use alm_core::ensure;
use alm_core::errors::Result;
use alm_time::{Date, Month};

/// How many calendar days a view shows at once.
///
/// The mode determines two things:
///
/// * the **visible range** implied by an anchor date
///   ([`visible_range`](ViewMode::visible_range)), and
/// * the **half-window radius** used by the selection stability rule
///   ([`radius`](ViewMode::radius)) — a selection move within
///   `anchor ± radius` days leaves the anchor untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// A horizontal strip of 1–9 consecutive days starting at the anchor.
    Days(u8),
    /// Two weeks (14 days) starting at the anchor.
    TwoWeek,
    /// The calendar month containing the anchor.
    Month,
    /// The calendar year containing the anchor.
    Year,
}

impl ViewMode {
    /// A multi-day strip view showing `n` consecutive days.
    ///
    /// # Errors
    /// Returns an error unless `n` is in `1..=9`.
    pub fn days(n: u8) -> Result<Self> {
        ensure!((1..=9).contains(&n), "day view count {n} out of range [1, 9]");
        Ok(ViewMode::Days(n))
    }

    /// Half-window radius in days for the selection stability rule.
    ///
    /// A 1-day view has radius 0, a 3-day view radius 1, the two-week view
    /// radius 7.  Month and year views use half their maximum span.
    pub fn radius(&self) -> i32 {
        match self {
            ViewMode::Days(n) => i32::from(*n) / 2,
            ViewMode::TwoWeek => 7,
            ViewMode::Month => 15,
            ViewMode::Year => 182,
        }
    }

    /// The inclusive day range this mode makes visible for `anchor`.
    ///
    /// Day-strip and two-week modes extend forward from the anchor; month
    /// and year modes snap to the calendar month/year containing it.
    pub fn visible_range(&self, anchor: Date) -> Result<(Date, Date)> {
        match self {
            ViewMode::Days(n) => Ok((anchor, anchor.add_days(i32::from(*n) - 1)?)),
            ViewMode::TwoWeek => Ok((anchor, anchor.add_days(13)?)),
            ViewMode::Month => {
                let first = Date::from_ymd(anchor.year(), anchor.month(), 1)?;
                Ok((first, anchor.end_of_month()))
            }
            ViewMode::Year => {
                let first = Date::from_ymd(anchor.year(), Month::January, 1)?;
                let last = Date::from_ymd(anchor.year(), Month::December, 31)?;
                Ok((first, last))
            }
        }
    }
}
