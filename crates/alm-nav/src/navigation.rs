//! `NavigationState` — anchor, selection, and the navigation operations.

use alm_time::{Date, TimeUnit};

use crate::view_mode::ViewMode;

/// The calendar unit moved by one [`NavigationState::navigate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavUnit {
    /// One calendar day.
    Day,
    /// One calendar week (exactly 7 days).
    Week,
    /// One calendar month (day-of-month preserved where possible).
    Month,
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward later dates.
    Forward,
    /// Toward earlier dates.
    Backward,
}

/// Navigation state for one calendar view session.
///
/// Owns the anchor date that positions the visible window, the optional
/// highlighted day, and the current [`ViewMode`].  Each view session owns
/// its own instance; the state is not shared.
///
/// Every mutating operation is all-or-nothing: if the underlying date
/// arithmetic fails (the result would leave the supported calendar range),
/// the call is a no-op and no field changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    anchor: Date,
    selected: Option<Date>,
    view_mode: ViewMode,
}

impl NavigationState {
    /// Create a state anchored at `anchor` with no selection.
    pub fn new(anchor: Date, view_mode: ViewMode) -> Self {
        NavigationState {
            anchor,
            selected: None,
            view_mode,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The anchor date positioning the visible window.
    pub fn anchor(&self) -> Date {
        self.anchor
    }

    /// The highlighted day, if any.  Independent of the anchor; the two
    /// need not fall on the same calendar day.
    pub fn selected(&self) -> Option<Date> {
        self.selected
    }

    /// The current view mode.
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// The inclusive day range currently visible.
    pub fn visible_range(&self) -> alm_core::Result<(Date, Date)> {
        self.view_mode.visible_range(self.anchor)
    }

    // ── Mutators ──────────────────────────────────────────────────────────────

    /// Switch the view mode.  The anchor and selection are untouched.
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Highlight `date`.
    pub fn select(&mut self, date: Date) {
        self.selected = Some(date);
    }

    /// Clear the highlighted day.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Move the anchor by exactly one `unit` in `direction`.
    ///
    /// Month steps preserve the day of the month, clamping to the target
    /// month's length; week and day steps are exactly 7 and 1 calendar
    /// days.  Month and year boundaries are crossed transparently.  If the
    /// step cannot be computed the anchor is left unchanged.
    pub fn navigate(&mut self, unit: NavUnit, direction: Direction) {
        let n = match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        let unit = match unit {
            NavUnit::Day => TimeUnit::Days,
            NavUnit::Week => TimeUnit::Weeks,
            NavUnit::Month => TimeUnit::Months,
        };
        if let Ok(next) = self.anchor.advance(n, unit) {
            self.anchor = next;
        }
    }

    /// Move the highlighted day by `days` calendar days (typically ±7 for
    /// week-up / week-down), then apply the stability rule.
    ///
    /// With no selection, or when the new date cannot be computed, the call
    /// is a no-op.  Otherwise the selection moves, and the anchor follows
    /// only if the new selection falls outside `anchor ± radius` of the
    /// current view mode — small moves inside the visible window must not
    /// make the whole view jump.
    pub fn move_selected_by(&mut self, days: i32) {
        let Some(selected) = self.selected else {
            return;
        };
        let Ok(moved) = selected.add_days(days) else {
            return;
        };
        self.selected = Some(moved);
        if (moved - self.anchor).abs() > self.view_mode.radius() {
            self.anchor = moved;
        }
    }
}
