//! `Date` — a Gregorian calendar day.
//!
//! Dates are stored as a serial number of days counted from an epoch of
//! December 31, 1899, so serial 1 is January 1, 1900.  The valid range is
//! 1900-01-01 through 2299-12-31.
//!
//! A `Date` carries no time of day and no timezone: two dates compare equal
//! exactly when they name the same calendar day.  All constructors and
//! arithmetic that can leave the valid range return `Result` rather than
//! panicking; the layers above absorb those errors as "state does not
//! advance" or "occurrence absent this year".

use alm_core::errors::{Error, Result};
use alm_core::ensure;

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number of days since 1899-12-31.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2299.
    pub const MAX: Date = Date(146_097);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1900–2299), month, and day-of-month.
    pub fn from_ymd(year: u16, month: Month, day: u8) -> Result<Self> {
        if !(1900..=2299).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2299]"
            )));
        }
        let last = days_in_month_num(year, month.number());
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {month} {year}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month.number(), day)))
    }

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `MIN..=MAX`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2299).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::from_number(m).expect("serial decomposition yields month 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month_num(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.  Serial 1 (1900-01-01) is a Monday.
    pub fn weekday(&self) -> Weekday {
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days (negative `n` moves backward).
    ///
    /// Returns an error if the result leaves the valid range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Advance by `n` of the given calendar unit.
    ///
    /// Month arithmetic preserves the day of the month, clamping it to the
    /// target month's length (Jan 31 + 1 month = Feb 28/29).  Weeks are
    /// exactly 7 days; years are exactly 12 months.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = ymd_from_serial(self.0);
                let total = m as i32 + n;
                let full_years = total.div_euclid(12);
                let rem = total.rem_euclid(12);
                let (new_m, extra_y) = if rem == 0 {
                    (12u8, full_years - 1)
                } else {
                    (rem as u8, full_years)
                };
                let new_y = y as i32 + extra_y;
                if !(1900..=2299).contains(&new_y) {
                    return Err(Error::Date(format!("year {new_y} out of range")));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month_num(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month_num(y, m)))
    }

    /// Return the *n*-th occurrence of `weekday` in the given month.
    ///
    /// The first of the month is advanced by
    /// `(target_weekday - weekday_of_first + 7) mod 7` days to reach the
    /// first occurrence of the target weekday, then by `(n - 1)` whole weeks.
    ///
    /// # Errors
    /// Returns an error if `n` is zero or the *n*-th occurrence does not
    /// exist in the month (e.g. a fifth Wednesday in February).
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: Month) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1");
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal() as i32;
        let target_wd = weekday.ordinal() as i32;
        let skip = (target_wd - first_wd).rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month_num(year, month.number()) {
            return Err(Error::Date(format!(
                "nth_weekday: no {n}-th {weekday} in {month} {year}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

/// Signed distance in calendar days (`other - self` is positive when
/// `other` is later).
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month.
pub fn days_in_month(year: u16, month: Month) -> u8 {
    days_in_month_num(year, month.number())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn days_in_month_num(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Convert (year, month, day) to a serial number (1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Whole years since 1900, plus the leap days among them.  1900 itself
    // is not a leap year (divisible by 100, not by 400).
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month_num(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, Month::from_number(m).unwrap(), d).unwrap()
    }

    #[test]
    fn epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(2299, 12, 31), Date::MAX);
    }

    #[test]
    fn ymd_roundtrip() {
        let cases = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap century
            (2100, 2, 28), // non-leap century
            (2025, 12, 8),
            (2299, 12, 31),
        ];
        for (y, m, d) in cases {
            let dt = date(y, m, d);
            assert_eq!(dt.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(dt.day(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn invalid_components() {
        assert!(Date::from_ymd(2025, Month::February, 29).is_err());
        assert!(Date::from_ymd(2025, Month::April, 31).is_err());
        assert!(Date::from_ymd(2025, Month::June, 0).is_err());
        assert!(Date::from_ymd(1899, Month::December, 31).is_err());
        assert!(Date::from_ymd(2300, Month::January, 1).is_err());
    }

    #[test]
    fn weekday_anchors() {
        // 1900-01-01 is a Monday; 2025-12-08 is a Monday.
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2025, 12, 8).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    }

    #[test]
    fn add_days_across_boundaries() {
        let d = date(2025, 12, 31).add_days(1).unwrap();
        assert_eq!(d, date(2026, 1, 1));
        let d = date(2024, 3, 1).add_days(-1).unwrap();
        assert_eq!(d, date(2024, 2, 29));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn advance_months_clamps_day() {
        let d = date(2023, 1, 31).advance(1, TimeUnit::Months).unwrap();
        assert_eq!(d, date(2023, 2, 28));
        let d = date(2024, 1, 31).advance(1, TimeUnit::Months).unwrap();
        assert_eq!(d, date(2024, 2, 29));
        let d = date(2025, 12, 8).advance(-1, TimeUnit::Months).unwrap();
        assert_eq!(d, date(2025, 11, 8));
    }

    #[test]
    fn advance_months_across_year() {
        let d = date(2025, 12, 15).advance(1, TimeUnit::Months).unwrap();
        assert_eq!(d, date(2026, 1, 15));
        let d = date(2025, 1, 15).advance(-1, TimeUnit::Months).unwrap();
        assert_eq!(d, date(2024, 12, 15));
        let d = date(2025, 6, 30).advance(2, TimeUnit::Years).unwrap();
        assert_eq!(d, date(2027, 6, 30));
    }

    #[test]
    fn day_distance() {
        assert_eq!(date(2025, 12, 8) - date(2025, 12, 1), 7);
        assert_eq!(date(2025, 12, 1) - date(2025, 12, 8), -7);
    }

    #[test]
    fn end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2025, 2, 15).end_of_month(), date(2025, 2, 28));
        assert_eq!(date(2025, 12, 8).end_of_month(), date(2025, 12, 31));
    }

    #[test]
    fn nth_weekday_examples() {
        // 3rd Wednesday of March 2024 = March 20.
        let d = Date::nth_weekday(3, Weekday::Wednesday, 2024, Month::March).unwrap();
        assert_eq!(d, date(2024, 3, 20));

        // 1st Monday of January 2024 = January 1.
        let d = Date::nth_weekday(1, Weekday::Monday, 2024, Month::January).unwrap();
        assert_eq!(d, date(2024, 1, 1));

        // 5th Monday of January 2024 = January 29.
        let d = Date::nth_weekday(5, Weekday::Monday, 2024, Month::January).unwrap();
        assert_eq!(d, date(2024, 1, 29));
    }

    #[test]
    fn nth_weekday_out_of_range() {
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, Month::February).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, Month::January).is_err());
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(date(2025, 12, 8).to_string(), "2025-12-08");
        assert_eq!(format!("{:?}", date(2025, 1, 2)), "Date(2025-01-02)");
    }
}
