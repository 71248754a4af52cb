//! Pay period and date range models.
//!
//! Pay period boundaries are supplied by an external collaborator; this
//! module defines the [`PeriodBoundary`] seam the engine consumes plus a
//! fixed-length [`BiweeklyPeriods`] implementation.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use timecard_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
/// );
/// assert!(range.contains(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; `start` and `end` are both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns `true` if `date` falls within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every day in the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let start = self.start;
        let end = self.end;
        std::iter::successors(Some(start), move |d| {
            d.succ_opt().filter(|next| *next <= end)
        })
    }
}

/// A payroll cycle with a sequential identifying number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The sequential period number within the payroll year.
    pub number: u32,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the period's date range.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Supplier of pay-period boundaries.
///
/// The engine consumes, never owns, period boundaries: callers pick the
/// implementation (payroll backend, fixed cycle, test stub).
pub trait PeriodBoundary {
    /// Returns the pay period enclosing `date`.
    fn period_for(&self, date: NaiveDate) -> PayPeriod;
}

/// Fixed 14-day pay periods counted from an anchor start date.
///
/// Period 1 starts on the anchor; dates before the anchor still resolve to
/// a well-formed cycle, with the number clamped at 0.
///
/// # Example
///
/// ```
/// use timecard_engine::models::{BiweeklyPeriods, PeriodBoundary};
/// use chrono::NaiveDate;
///
/// let periods = BiweeklyPeriods::new(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
/// let period = periods.period_for(NaiveDate::from_ymd_opt(2025, 1, 20).unwrap());
/// assert_eq!(period.number, 2);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BiweeklyPeriods {
    anchor: NaiveDate,
}

impl BiweeklyPeriods {
    /// Creates a biweekly cycle anchored at the start of period 1.
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }
}

impl PeriodBoundary for BiweeklyPeriods {
    fn period_for(&self, date: NaiveDate) -> PayPeriod {
        let days_since = (date - self.anchor).num_days();
        let index = days_since.div_euclid(14);
        let start = self.anchor + Duration::days(index * 14);
        PayPeriod {
            number: (index + 1).max(0) as u32,
            start_date: start,
            end_date: start + Duration::days(13),
        }
    }
}
