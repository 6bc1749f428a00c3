//! `TimeUnit` — calendar units accepted by [`Date::advance`](crate::Date::advance).

/// A unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months (day-of-month preserved, clamped to month length).
    Months,
    /// Calendar years (12 months).
    Years,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
        }
    }
}
