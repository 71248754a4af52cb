//! The categorization engine facade.
//!
//! [`TimecardEngine`] owns a region, its resolved overtime policy, the
//! labour-code lookup table, and a shared [`HolidayCalendar`]; it exposes
//! the consumer surface over an in-memory entry collection it reads but
//! never stores.

mod holiday_lifecycle;

pub use holiday_lifecycle::{HOLIDAY_ENTRY_HOURS, apply_stat_holidays, remove_stat_holidays};

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::{
    WeekOvertime, calculate_range_totals, compute_week_overtime,
};
use crate::calendar::HolidayCalendar;
use crate::config::EngineConfig;
use crate::models::{CodeCategoryMap, DateRange, Region, StatHoliday, SummaryTotals, TimeEntry};
use crate::policy::{OvertimePolicy, PolicyOverride};

/// The Holiday & Overtime Categorization Engine.
///
/// All categorization operations are pure, synchronous transformations
/// over the entry slice they are given; only
/// [`holidays`](TimecardEngine::holidays) suspends, for the single remote
/// round-trip absorbed by the calendar.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use timecard_engine::calendar::HolidayCalendar;
/// use timecard_engine::config::ConfigLoader;
/// use timecard_engine::engine::TimecardEngine;
/// use timecard_engine::models::Region;
///
/// let loader = ConfigLoader::load("./config/timecard").unwrap();
/// let calendar = Arc::new(HolidayCalendar::local_only());
/// let engine = TimecardEngine::new(Region::new("CA", "BC"), loader.config(), calendar);
/// ```
#[derive(Debug, Clone)]
pub struct TimecardEngine {
    region: Region,
    codes: CodeCategoryMap,
    policy: OvertimePolicy,
    calendar: Arc<HolidayCalendar>,
}

impl TimecardEngine {
    /// Creates an engine for a region with its inferred policy.
    pub fn new(region: Region, config: &EngineConfig, calendar: Arc<HolidayCalendar>) -> Self {
        let policy = config.policies().policy_for(&region);
        Self {
            region,
            codes: config.codes().clone(),
            policy,
            calendar,
        }
    }

    /// Creates an engine whose inferred policy is partially overridden.
    ///
    /// Fields absent from the override keep the region's inferred values
    /// (notably the weekly cap).
    pub fn with_policy_override(
        region: Region,
        config: &EngineConfig,
        calendar: Arc<HolidayCalendar>,
        overrides: &PolicyOverride,
    ) -> Self {
        let policy = config.policies().policy_for(&region).with_overrides(overrides);
        Self {
            region,
            codes: config.codes().clone(),
            policy,
            calendar,
        }
    }

    /// Returns the engine's region.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Returns the resolved overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.policy
    }

    /// Classifies and sums the entries falling in `range`.
    pub fn categorize(&self, entries: &[TimeEntry], range: DateRange) -> SummaryTotals {
        calculate_range_totals(entries, range, &self.codes)
    }

    /// Computes the per-day OT/DT allocation for the week containing
    /// `reference_date`.
    pub fn week_overtime(&self, entries: &[TimeEntry], reference_date: NaiveDate) -> WeekOvertime {
        compute_week_overtime(entries, reference_date, &self.policy, &self.codes)
    }

    /// Returns the `(ot, dt)` pair for a single day, computed in the
    /// context of its week.
    pub fn daily_overtime(&self, entries: &[TimeEntry], date: NaiveDate) -> (Decimal, Decimal) {
        let week = self.week_overtime(entries, date);
        week.day(date)
            .map(|d| (d.ot, d.dt))
            .unwrap_or((Decimal::ZERO, Decimal::ZERO))
    }

    /// Returns the region's holidays for a year, remote-merged when the
    /// calendar has a source configured. Never fails; see
    /// [`HolidayCalendar::holidays`].
    pub async fn holidays(&self, year: i32) -> Vec<StatHoliday> {
        self.calendar.holidays(year, &self.region).await
    }

    /// Returns `true` if `date` is a statutory holiday in the region.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.calendar.is_stat_holiday(date, &self.region)
    }

    /// Returns the name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<String> {
        self.calendar.holiday_name(date, &self.region)
    }

    /// Synthesizes holiday entries for every statutory holiday date in
    /// `range` and normalizes pre-existing ones. Idempotent.
    pub fn add_stat_holidays_for_period(&self, entries: &mut Vec<TimeEntry>, range: DateRange) {
        let dates = self.holiday_dates_in_range(range);
        apply_stat_holidays(entries, &dates, range);
    }

    /// Deletes holiday-coded entries whose date is a statutory holiday in
    /// `range`.
    pub fn remove_stat_holidays_for_period(&self, entries: &mut Vec<TimeEntry>, range: DateRange) {
        let dates = self.holiday_dates_in_range(range);
        remove_stat_holidays(entries, &dates, range);
    }

    /// Drops holiday cache entries not belonging to this engine's region.
    pub fn purge_cache_except_region(&self) {
        self.calendar.purge_cache_except_region(&self.region);
    }

    /// Collects the distinct holiday dates inside `range`, using cached
    /// lists when present and local rules otherwise.
    fn holiday_dates_in_range(&self, range: DateRange) -> BTreeSet<NaiveDate> {
        let mut dates = BTreeSet::new();
        for year in range.start.year()..=range.end.year() {
            for holiday in self.calendar.known_holidays(year, &self.region) {
                if range.contains(holiday.date) {
                    dates.insert(holiday.date);
                }
            }
        }
        dates
    }
}
