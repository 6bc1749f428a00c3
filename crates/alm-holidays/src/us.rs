//! Built-in United States holiday table.
//!
//! This is configuration expressed as data: every entry is a
//! [`HolidayDefinition`] whose recurrence rule carries the full schedule.
//! "Last weekday of month" holidays (Memorial Day) fall outside the two
//! recurring rule kinds and are not included.

use alm_time::{Month, Weekday};

use crate::definition::{HolidayCategory, HolidayDefinition, Recurrence};

fn fixed(month: Month, day: u8) -> Recurrence {
    Recurrence::FixedDate { month, day }
}

fn nth(nth: u8, weekday: Weekday, month: Month) -> Recurrence {
    Recurrence::NthWeekday {
        month,
        weekday,
        nth,
    }
}

/// The default United States holiday definitions.
pub fn definitions() -> Vec<HolidayDefinition> {
    use HolidayCategory::{Cultural, Federal, Observance, Seasonal};
    use Month::*;
    use Weekday::{Monday, Sunday, Thursday};

    vec![
        HolidayDefinition::new("New Year's Day", fixed(January, 1), Federal)
            .with_emoji("🎆")
            .with_description("First day of the calendar year"),
        HolidayDefinition::new("Martin Luther King Jr. Day", nth(3, Monday, January), Federal)
            .with_description("Third Monday of January"),
        HolidayDefinition::new("Groundhog Day", fixed(February, 2), Seasonal).with_emoji("🦫"),
        HolidayDefinition::new("Valentine's Day", fixed(February, 14), Cultural)
            .with_emoji("💝"),
        HolidayDefinition::new("Presidents' Day", nth(3, Monday, February), Federal)
            .with_description("Third Monday of February"),
        HolidayDefinition::new("St. Patrick's Day", fixed(March, 17), Cultural)
            .with_emoji("☘️"),
        HolidayDefinition::new("Mother's Day", nth(2, Sunday, May), Observance)
            .with_emoji("💐")
            .with_description("Second Sunday of May"),
        HolidayDefinition::new("Father's Day", nth(3, Sunday, June), Observance)
            .with_description("Third Sunday of June"),
        HolidayDefinition::new("Juneteenth", fixed(June, 19), Federal),
        HolidayDefinition::new("Independence Day", fixed(July, 4), Federal).with_emoji("🎇"),
        HolidayDefinition::new("Labor Day", nth(1, Monday, September), Federal)
            .with_description("First Monday of September"),
        HolidayDefinition::new("Columbus Day", nth(2, Monday, October), Federal)
            .with_description("Second Monday of October"),
        HolidayDefinition::new("Halloween", fixed(October, 31), Cultural).with_emoji("🎃"),
        HolidayDefinition::new("Veterans Day", fixed(November, 11), Federal),
        HolidayDefinition::new("Thanksgiving", nth(4, Thursday, November), Federal)
            .with_emoji("🦃")
            .with_description("Fourth Thursday of November"),
        HolidayDefinition::new("Christmas", fixed(December, 25), Federal).with_emoji("🎄"),
    ]
}
