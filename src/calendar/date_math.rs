//! Pure calendar arithmetic.
//!
//! Every function here is a total function over its inputs; `None` marks
//! dates outside chrono's representable range (or, for
//! [`observed_date`], a date that needs no shift).

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Computes Easter Sunday for a year using the Meeus/Jones/Butcher
/// algorithm (Gregorian calendar).
///
/// # Example
///
/// ```
/// use timecard_engine::calendar::date_math::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2024),
///     NaiveDate::from_ymd_opt(2024, 3, 31),
/// );
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Returns the nth occurrence of a weekday in a month, e.g. the 2nd Monday
/// of October.
///
/// `occurrence` is 1-based; `None` when the occurrence does not exist in
/// the month (e.g. a 5th Monday of February).
pub fn nth_weekday(year: i32, month: u32, weekday: Weekday, occurrence: u32) -> Option<NaiveDate> {
    let n = occurrence.checked_sub(1)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset =
        (weekday.num_days_from_monday() + 7 - first.weekday().num_days_from_monday()) % 7;
    let date = first.checked_add_days(Days::new((offset + 7 * n) as u64))?;
    (date.month() == month).then_some(date)
}

/// Returns the last occurrence of a weekday on or before a given day of
/// month, e.g. the last Monday on or before May 24.
pub fn last_weekday_on_or_before(
    year: i32,
    month: u32,
    day: u32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let anchor = NaiveDate::from_ymd_opt(year, month, day)?;
    let back =
        (anchor.weekday().num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    anchor.checked_sub_days(Days::new(back as u64))
}

/// Shifts a weekend-falling fixed holiday to the Monday it is observed on.
///
/// Saturday shifts +2 days, Sunday shifts +1 day; a weekday date needs no
/// shift and returns `None`.
pub fn observed_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => None,
    }
}

/// Returns the Sunday starting the week containing `date`.
///
/// Sunday-start weeks are the grid used by the weekly rest-day rule, the
/// weekly overflow walk, and the on-call stipend.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(back as u64)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// DM-001: Easter 2024 is March 31
    #[test]
    fn test_easter_2024() {
        assert_eq!(easter_sunday(2024), Some(date(2024, 3, 31)));
    }

    /// DM-002: Easter 2025 is April 20
    #[test]
    fn test_easter_2025() {
        assert_eq!(easter_sunday(2025), Some(date(2025, 4, 20)));
    }

    #[test]
    fn test_easter_reference_years() {
        assert_eq!(easter_sunday(2000), Some(date(2000, 4, 23)));
        assert_eq!(easter_sunday(2023), Some(date(2023, 4, 9)));
        assert_eq!(easter_sunday(2026), Some(date(2026, 4, 5)));
        // April holds most Easters, but March ones must work too
        assert_eq!(easter_sunday(2016), Some(date(2016, 3, 27)));
    }

    /// DM-003: 2nd Monday of October 2025 is Thanksgiving, Oct 13
    #[test]
    fn test_nth_weekday_thanksgiving() {
        assert_eq!(
            nth_weekday(2025, 10, Weekday::Mon, 2),
            Some(date(2025, 10, 13))
        );
    }

    #[test]
    fn test_nth_weekday_first_occurrence_on_first_day() {
        // 2025-09-01 is a Monday: Labour Day
        assert_eq!(
            nth_weekday(2025, 9, Weekday::Mon, 1),
            Some(date(2025, 9, 1))
        );
    }

    #[test]
    fn test_nth_weekday_nonexistent_occurrence() {
        // February 2025 has only four Mondays
        assert_eq!(nth_weekday(2025, 2, Weekday::Mon, 5), None);
        assert_eq!(nth_weekday(2025, 2, Weekday::Mon, 0), None);
    }

    /// DM-004: last Monday on or before May 24
    #[test]
    fn test_last_weekday_on_or_before_victoria_day() {
        // 2025-05-24 is a Saturday; the Monday before is May 19
        assert_eq!(
            last_weekday_on_or_before(2025, 5, 24, Weekday::Mon),
            Some(date(2025, 5, 19))
        );
        // 2027-05-24 is itself a Monday
        assert_eq!(
            last_weekday_on_or_before(2027, 5, 24, Weekday::Mon),
            Some(date(2027, 5, 24))
        );
    }

    /// DM-005: Saturday holidays observe on Monday (+2)
    #[test]
    fn test_observed_date_saturday() {
        // 2027-12-25 is a Saturday
        assert_eq!(observed_date(date(2027, 12, 25)), Some(date(2027, 12, 27)));
    }

    /// DM-006: Sunday holidays observe on Monday (+1)
    #[test]
    fn test_observed_date_sunday() {
        // 2023-01-01 is a Sunday
        assert_eq!(observed_date(date(2023, 1, 1)), Some(date(2023, 1, 2)));
    }

    /// DM-007: weekday holidays need no observed shift
    #[test]
    fn test_observed_date_weekday() {
        // 2025-07-01 is a Tuesday
        assert_eq!(observed_date(date(2025, 7, 1)), None);
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2025-06-04 is a Wednesday; its week starts Sunday June 1
        assert_eq!(week_start(date(2025, 6, 4)), date(2025, 6, 1));
        // A Sunday is its own week start
        assert_eq!(week_start(date(2025, 6, 1)), date(2025, 6, 1));
        // Saturday belongs to the week that started six days earlier
        assert_eq!(week_start(date(2025, 6, 7)), date(2025, 6, 1));
    }
}
