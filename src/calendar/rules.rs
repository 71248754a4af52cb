//! Per-region statutory holiday rules.
//!
//! Fixed-date holidays get an "(Observed)" sibling whenever they land on a
//! weekend; Monday-anchored holidays never need one. Region additions are
//! gated by the year they first took effect.

use chrono::{Days, NaiveDate, Weekday};

use crate::models::{Region, StatHoliday};

use super::date_math::{easter_sunday, last_weekday_on_or_before, nth_weekday, observed_date};

/// Computes the statutory holidays of a region for a year.
///
/// Deterministic and order-stable: two calls with identical inputs return
/// identical output, sorted by date with observed variants after their base
/// date on ties.
///
/// # Example
///
/// ```
/// use timecard_engine::calendar::rules::stat_holidays;
/// use timecard_engine::models::Region;
///
/// let holidays = stat_holidays(2025, &Region::new("CA", "BC"));
/// assert!(holidays.iter().any(|h| h.name == "Canada Day"));
/// assert!(holidays.windows(2).all(|w| w[0].date <= w[1].date));
/// ```
pub fn stat_holidays(year: i32, region: &Region) -> Vec<StatHoliday> {
    let mut out = Vec::new();

    match region.country.as_str() {
        "CA" => canada_holidays(year, &region.subdivision, &mut out),
        "US" => us_holidays(year, &mut out),
        _ => {
            // Minimal portable set for countries without a full roster.
            push_fixed(&mut out, "New Year's Day", year, 1, 1);
            push_fixed(&mut out, "Christmas Day", year, 12, 25);
        }
    }

    out.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.is_observed.cmp(&b.is_observed))
            .then(a.name.cmp(&b.name))
    });
    out
}

fn canada_holidays(year: i32, subdivision: &str, out: &mut Vec<StatHoliday>) {
    push_fixed(out, "New Year's Day", year, 1, 1);

    // Good Friday: two days before Easter Sunday
    if let Some(easter) = easter_sunday(year) {
        if let Some(good_friday) = easter.checked_sub_days(Days::new(2)) {
            out.push(StatHoliday::new("Good Friday", good_friday));
        }
    }

    // Victoria Day: last Monday on or before May 24
    if let Some(date) = last_weekday_on_or_before(year, 5, 24, Weekday::Mon) {
        out.push(StatHoliday::new("Victoria Day", date));
    }

    push_fixed(out, "Canada Day", year, 7, 1);

    // Labour Day: first Monday of September
    if let Some(date) = nth_weekday(year, 9, Weekday::Mon, 1) {
        out.push(StatHoliday::new("Labour Day", date));
    }

    // Thanksgiving: second Monday of October
    if let Some(date) = nth_weekday(year, 10, Weekday::Mon, 2) {
        out.push(StatHoliday::new("Thanksgiving", date));
    }

    push_fixed(out, "Remembrance Day", year, 11, 11);
    push_fixed(out, "Christmas Day", year, 12, 25);

    match subdivision {
        "BC" => {
            // Family Day: third Monday of February, recognized from 2013
            if year >= 2013 {
                if let Some(date) = nth_weekday(year, 2, Weekday::Mon, 3) {
                    out.push(StatHoliday::new("Family Day", date));
                }
            }
            // British Columbia Day: first Monday of August
            if let Some(date) = nth_weekday(year, 8, Weekday::Mon, 1) {
                out.push(StatHoliday::new("British Columbia Day", date));
            }
            // National Day for Truth and Reconciliation, from 2021
            if year >= 2021 {
                push_fixed(out, "National Day for Truth and Reconciliation", year, 9, 30);
            }
        }
        "AB" => {
            if year >= 1990 {
                if let Some(date) = nth_weekday(year, 2, Weekday::Mon, 3) {
                    out.push(StatHoliday::new("Family Day", date));
                }
            }
        }
        "SK" => {
            if year >= 2007 {
                if let Some(date) = nth_weekday(year, 2, Weekday::Mon, 3) {
                    out.push(StatHoliday::new("Family Day", date));
                }
            }
            if let Some(date) = nth_weekday(year, 8, Weekday::Mon, 1) {
                out.push(StatHoliday::new("Saskatchewan Day", date));
            }
        }
        "ON" => {
            if year >= 2008 {
                if let Some(date) = nth_weekday(year, 2, Weekday::Mon, 3) {
                    out.push(StatHoliday::new("Family Day", date));
                }
            }
            push_fixed(out, "Boxing Day", year, 12, 26);
        }
        _ => {}
    }
}

fn us_holidays(year: i32, out: &mut Vec<StatHoliday>) {
    push_fixed(out, "New Year's Day", year, 1, 1);

    // Memorial Day: last Monday of May
    if let Some(date) = last_weekday_on_or_before(year, 5, 31, Weekday::Mon) {
        out.push(StatHoliday::new("Memorial Day", date));
    }

    push_fixed(out, "Independence Day", year, 7, 4);

    // Labor Day: first Monday of September
    if let Some(date) = nth_weekday(year, 9, Weekday::Mon, 1) {
        out.push(StatHoliday::new("Labor Day", date));
    }

    // Thanksgiving: fourth Thursday of November
    if let Some(date) = nth_weekday(year, 11, Weekday::Thu, 4) {
        out.push(StatHoliday::new("Thanksgiving", date));
    }

    push_fixed(out, "Christmas Day", year, 12, 25);
}

/// Pushes a fixed-date holiday and, when it lands on a weekend, its
/// observed Monday sibling.
fn push_fixed(out: &mut Vec<StatHoliday>, name: &str, year: i32, month: u32, day: u32) {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return;
    };
    out.push(StatHoliday::new(name, date));
    if let Some(shifted) = observed_date(date) {
        out.push(StatHoliday::observed(name, shifted));
    }
}
