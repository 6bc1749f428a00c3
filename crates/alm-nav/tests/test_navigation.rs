//! Navigation engine tests: exact unit offsets, round trips, and the
//! selection stability rule across every view mode.

use alm_nav::{Direction, NavUnit, NavigationState, ViewMode};
use alm_time::{Date, Month};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, Month::from_number(m).unwrap(), d).unwrap()
}

fn all_modes() -> Vec<ViewMode> {
    let mut modes: Vec<ViewMode> = (1..=9).map(|n| ViewMode::days(n).unwrap()).collect();
    modes.extend([ViewMode::TwoWeek, ViewMode::Month, ViewMode::Year]);
    modes
}

#[test]
fn exact_unit_offsets() {
    let start = date(2025, 12, 8);

    let mut state = NavigationState::new(start, ViewMode::Days(1));
    state.navigate(NavUnit::Day, Direction::Backward);
    assert_eq!(state.anchor(), date(2025, 12, 7));

    let mut state = NavigationState::new(start, ViewMode::Days(1));
    state.navigate(NavUnit::Week, Direction::Backward);
    assert_eq!(state.anchor(), date(2025, 12, 1));

    let mut state = NavigationState::new(start, ViewMode::Days(1));
    state.navigate(NavUnit::Month, Direction::Backward);
    assert_eq!(state.anchor(), date(2025, 11, 8));
}

#[test]
fn week_forward_across_year_boundary() {
    // 2025-12-29 is a Monday; one week forward lands on 2026-01-05.
    let mut state = NavigationState::new(date(2025, 12, 29), ViewMode::TwoWeek);
    state.navigate(NavUnit::Week, Direction::Forward);
    assert_eq!(state.anchor(), date(2026, 1, 5));
}

#[test]
fn week_navigation_round_trip() {
    // Forward-then-backward returns to the starting day from every day of
    // a two-year sweep.
    let mut anchor = date(2024, 1, 1);
    let end = date(2026, 1, 1);
    while anchor < end {
        let mut state = NavigationState::new(anchor, ViewMode::TwoWeek);
        state.navigate(NavUnit::Week, Direction::Forward);
        state.navigate(NavUnit::Week, Direction::Backward);
        assert_eq!(state.anchor(), anchor, "round trip failed from {anchor}");
        anchor = anchor.add_days(1).unwrap();
    }
}

#[test]
fn month_round_trip_preserves_day_when_possible() {
    let mut state = NavigationState::new(date(2025, 12, 8), ViewMode::Month);
    state.navigate(NavUnit::Month, Direction::Forward);
    assert_eq!(state.anchor(), date(2026, 1, 8));
    state.navigate(NavUnit::Month, Direction::Backward);
    assert_eq!(state.anchor(), date(2025, 12, 8));
}

#[test]
fn stability_rule_two_week_window() {
    // R = 7: a 7-day selection move stays inside the window, so the anchor
    // must not jump.
    let start = date(2025, 12, 8);
    let mut state = NavigationState::new(start, ViewMode::TwoWeek);
    state.select(start);
    state.move_selected_by(-7);
    assert_eq!(state.selected(), Some(date(2025, 12, 1)));
    assert_eq!(state.anchor(), start);
}

#[test]
fn stability_rule_three_day_resync() {
    // R = 1: the same 7-day move leaves the window and must recenter it.
    let start = date(2025, 12, 8);
    let mut state = NavigationState::new(start, ViewMode::Days(3));
    state.select(start);
    state.move_selected_by(-7);
    assert_eq!(state.selected(), Some(date(2025, 12, 1)));
    assert_eq!(state.anchor(), date(2025, 12, 1));
}

#[test]
fn stability_rule_every_mode() {
    // For every mode: a move of exactly R days keeps the anchor, a move of
    // R + 1 days resynchronizes it to the new selection.
    let start = date(2025, 6, 15);
    for mode in all_modes() {
        let r = mode.radius();

        if r > 0 {
            let mut state = NavigationState::new(start, mode);
            state.select(start);
            state.move_selected_by(r);
            assert_eq!(
                state.anchor(),
                start,
                "anchor moved on an in-window step in {mode:?}"
            );
            assert_eq!(state.selected(), Some(start.add_days(r).unwrap()));
        }

        let mut state = NavigationState::new(start, mode);
        state.select(start);
        state.move_selected_by(r + 1);
        let moved = start.add_days(r + 1).unwrap();
        assert_eq!(
            state.anchor(),
            moved,
            "anchor did not resync on an out-of-window step in {mode:?}"
        );
        assert_eq!(state.selected(), Some(moved));
    }
}

#[test]
fn move_selected_without_selection_is_noop() {
    for mode in all_modes() {
        let mut state = NavigationState::new(date(2025, 12, 8), mode);
        state.move_selected_by(-7);
        assert_eq!(state.selected(), None);
        assert_eq!(state.anchor(), date(2025, 12, 8));
    }
}

#[test]
fn selection_and_anchor_are_independent() {
    let mut state = NavigationState::new(date(2025, 12, 8), ViewMode::Month);
    state.select(date(2026, 2, 1));
    assert_ne!(state.selected(), Some(state.anchor()));
    state.clear_selection();
    assert_eq!(state.selected(), None);
}

#[test]
fn visible_range_matches_mode_geometry() {
    let anchor = date(2025, 12, 8);
    for n in 1..=9u8 {
        let state = NavigationState::new(anchor, ViewMode::days(n).unwrap());
        let (start, end) = state.visible_range().unwrap();
        assert_eq!(start, anchor);
        assert_eq!(end - start, i32::from(n) - 1);
    }
    let state = NavigationState::new(anchor, ViewMode::Month);
    let (start, end) = state.visible_range().unwrap();
    assert_eq!(start, date(2025, 12, 1));
    assert_eq!(end, date(2025, 12, 31));
}
