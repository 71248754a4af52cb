//! Per-week overtime orchestration.
//!
//! Ties the daily split, the Sunday rest-day floor, the weekly overflow
//! walk, and the reporting cap together over a Sunday-start week.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::date_math::week_start;
use crate::models::{CodeCategoryMap, PayCategory, TimeEntry};
use crate::policy::OvertimePolicy;

use super::classification::{classify_entry, counts_toward_totals};
use super::daily_overtime::{DailySplit, apply_reporting_cap, apply_sunday_rest, split_daily_hours};
use super::weekly_overflow::allocate_weekly_excess;

/// One day's overtime allocation within a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOvertime {
    /// The day.
    pub date: NaiveDate,
    /// Worked hours feeding the threshold allocation (Regular + Night
    /// classified entries).
    pub worked: Decimal,
    /// Hours allocated to the overtime band.
    pub ot: Decimal,
    /// Hours allocated to the double-time band.
    pub dt: Decimal,
}

impl DayOvertime {
    /// Hours left at straight time after the allocation.
    pub fn regular(&self) -> Decimal {
        (self.worked - self.ot - self.dt).max(Decimal::ZERO)
    }
}

/// A full week's overtime allocation, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOvertime {
    /// The Sunday the week starts on.
    pub week_start: NaiveDate,
    /// Per-day allocations in date order; always seven entries.
    pub days: Vec<DayOvertime>,
}

impl WeekOvertime {
    /// The day's allocation, if the date falls in this week.
    pub fn day(&self, date: NaiveDate) -> Option<&DayOvertime> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Sum of the OT band across the week.
    pub fn ot_total(&self) -> Decimal {
        self.days.iter().map(|d| d.ot).sum()
    }

    /// Sum of the double-time band across the week.
    pub fn dt_total(&self) -> Decimal {
        self.days.iter().map(|d| d.dt).sum()
    }

    /// Sum of worked hours across the week.
    pub fn worked_total(&self) -> Decimal {
        self.days.iter().map(|d| d.worked).sum()
    }
}

/// Computes the per-day OT/DT allocation for the week containing
/// `reference_date`.
///
/// 1. Each day's worked base sums the hours of its Regular- and
///    Night-classified entries (vacation, stat, and on-call hours do not
///    feed the thresholds; excluded entries never do).
/// 2. The daily thresholds split each day.
/// 3. The Sunday rest-day floor is applied to the first day.
/// 4. Weekly excess past the policy's weekly cap is reallocated backward
///    from Saturday.
/// 5. The reported-OT cap, when set, rolls per-day overflow into DT.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::compute_week_overtime;
/// use timecard_engine::models::{CodeCategoryMap, PayCategory, TimeEntry};
/// use timecard_engine::policy::OvertimePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let codes = CodeCategoryMap::from_entries(vec![
///     ("REG".to_string(), PayCategory::Regular),
/// ]).unwrap();
/// let policy = OvertimePolicy {
///     daily_regular_cap: Some(Decimal::from(8)),
///     daily_ot_cap: Some(Decimal::from(12)),
///     daily_dt_cap: Some(Decimal::from(12)),
///     weekly_regular_cap: Some(Decimal::from(40)),
///     daily_ot_reporting_cap: None,
/// };
/// // Monday June 2, 2025: a ten-hour day
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let entries = vec![TimeEntry::new(day, "Site 14", "REG", Decimal::from(10))];
///
/// let week = compute_week_overtime(&entries, day, &policy, &codes);
/// assert_eq!(week.day(day).unwrap().ot, Decimal::from(2));
/// ```
pub fn compute_week_overtime(
    entries: &[TimeEntry],
    reference_date: NaiveDate,
    policy: &OvertimePolicy,
    codes: &CodeCategoryMap,
) -> WeekOvertime {
    let start = week_start(reference_date);
    let mut days = Vec::with_capacity(7);

    for offset in 0u64..7 {
        let Some(date) = start.checked_add_days(Days::new(offset)) else {
            continue;
        };
        let worked: Decimal = entries
            .iter()
            .filter(|e| e.date == date && counts_toward_totals(e, codes))
            .filter(|e| {
                matches!(
                    classify_entry(e, codes),
                    PayCategory::Regular | PayCategory::Night
                )
            })
            .map(|e| e.hours)
            .sum();

        let mut split = split_daily_hours(worked, policy);
        if offset == 0 {
            split = apply_sunday_rest(split, worked, policy);
        }
        days.push(DayOvertime {
            date,
            worked,
            ot: split.ot,
            dt: split.dt,
        });
    }

    if let Some(weekly_cap) = policy.weekly_regular_cap {
        allocate_weekly_excess(&mut days, weekly_cap);
    }

    for day in &mut days {
        let capped = apply_reporting_cap(DailySplit { ot: day.ot, dt: day.dt }, policy);
        day.ot = capped.ot;
        day.dt = capped.dt;
    }

    WeekOvertime {
        week_start: start,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn codes() -> CodeCategoryMap {
        CodeCategoryMap::from_entries(vec![
            ("REG".to_string(), PayCategory::Regular),
            ("VAC".to_string(), PayCategory::Vacation),
            ("N".to_string(), PayCategory::Night),
            ("H".to_string(), PayCategory::Stat),
            ("OC".to_string(), PayCategory::OnCall),
        ])
        .unwrap()
    }

    fn three_tier_policy() -> OvertimePolicy {
        OvertimePolicy {
            daily_regular_cap: Some(dec("8")),
            daily_ot_cap: Some(dec("12")),
            daily_dt_cap: Some(dec("12")),
            weekly_regular_cap: Some(dec("40")),
            daily_ot_reporting_cap: None,
        }
    }

    // Week of Sunday June 1, 2025
    fn sunday() -> NaiveDate {
        date(2025, 6, 1)
    }

    fn weekday_entries(hours: &str) -> Vec<TimeEntry> {
        // Monday through Friday, `hours` each
        (2..=6)
            .map(|d| TimeEntry::new(date(2025, 6, d), "Site 14", "REG", dec(hours)))
            .collect()
    }

    /// WS-001: the reference date snaps to its Sunday week start
    #[test]
    fn test_reference_date_snaps_to_sunday() {
        let week = compute_week_overtime(&[], date(2025, 6, 4), &three_tier_policy(), &codes());
        assert_eq!(week.week_start, sunday());
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].date, sunday());
        assert_eq!(week.days[6].date, date(2025, 6, 7));
    }

    /// WS-002: the reference weekly-overflow scenario
    ///
    /// Five ten-hour weekdays under 8/12/12/40: each day starts at
    /// (ot 2, dt 0); the 10-hour weekly excess walks backward from
    /// Saturday; hours are conserved and straight time shrinks.
    #[test]
    fn test_weekly_overflow_scenario() {
        let entries = weekday_entries("10");
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());

        assert_eq!(week.worked_total(), dec("50"));
        // Friday's remaining 8 regular hours absorb first, then 2 of Thursday's
        let friday = week.day(date(2025, 6, 6)).unwrap();
        let thursday = week.day(date(2025, 6, 5)).unwrap();
        assert_eq!(friday.ot, dec("10"));
        assert_eq!(friday.regular(), dec("0"));
        assert_eq!(thursday.ot, dec("4"));
        assert_eq!(thursday.regular(), dec("6"));

        // Conservation: regular + ot + dt still totals the worked 50
        let reclassified: Decimal = week.days.iter().map(|d| d.regular() + d.ot + d.dt).sum();
        assert_eq!(reclassified, dec("50"));
        // Straight time shrank relative to the naive per-day split (5 × 8)
        let regular_total: Decimal = week.days.iter().map(|d| d.regular()).sum();
        assert!(regular_total < dec("40"));
        assert_eq!(week.ot_total(), dec("20"));
        assert_eq!(week.dt_total(), dec("0"));
    }

    /// WS-003: under the weekly cap nothing is reallocated
    #[test]
    fn test_no_overflow_under_weekly_cap() {
        let entries = weekday_entries("8");
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        assert_eq!(week.ot_total(), dec("0"));
        assert_eq!(week.dt_total(), dec("0"));
    }

    /// WS-004: Sunday hours are floored to OT
    #[test]
    fn test_sunday_hours_all_overtime() {
        let entries = vec![TimeEntry::new(sunday(), "Site 14", "REG", dec("6"))];
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        let sun = week.day(sunday()).unwrap();
        assert_eq!(sun.ot, dec("6"));
        assert_eq!(sun.regular(), dec("0"));
    }

    /// WS-005: vacation, stat, and on-call hours do not feed the thresholds
    #[test]
    fn test_non_worked_categories_excluded_from_base() {
        let entries = vec![
            TimeEntry::new(date(2025, 6, 2), "Site 14", "REG", dec("8")),
            TimeEntry::new(date(2025, 6, 2), "Site 14", "VAC", dec("8")),
            TimeEntry::new(date(2025, 6, 2), "Stat", "H", dec("8")),
            TimeEntry::new(date(2025, 6, 2), "Site 14", "OC", dec("8")),
        ];
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        let monday = week.day(date(2025, 6, 2)).unwrap();
        assert_eq!(monday.worked, dec("8"));
        assert_eq!(monday.ot, dec("0"));
    }

    /// WS-006: night-shift hours do feed the worked base
    #[test]
    fn test_night_hours_feed_worked_base() {
        let entries = vec![
            TimeEntry::new(date(2025, 6, 2), "Site 14", "REG", dec("6")),
            TimeEntry::new(date(2025, 6, 2), "Site 14", "N", dec("4")),
        ];
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        let monday = week.day(date(2025, 6, 2)).unwrap();
        assert_eq!(monday.worked, dec("10"));
        assert_eq!(monday.ot, dec("2"));
    }

    /// WS-007: excluded entries never feed the worked base
    #[test]
    fn test_excluded_entries_not_in_worked_base() {
        let entries = vec![
            TimeEntry::new(date(2025, 6, 2), "Site 14", "REG", dec("600")),
            TimeEntry::new(date(2025, 6, 2), "", "REG", dec("8")),
        ];
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        assert_eq!(week.day(date(2025, 6, 2)).unwrap().worked, dec("0"));
    }

    /// WS-008: weekly-only policy still reallocates excess backward
    #[test]
    fn test_weekly_only_policy_overflow() {
        let policy = OvertimePolicy {
            weekly_regular_cap: Some(dec("44")),
            ..OvertimePolicy::default()
        };
        // Five 10-hour weekdays: 50 worked, 6 over the cap
        let entries = weekday_entries("10");
        let week = compute_week_overtime(&entries, sunday(), &policy, &codes());
        let friday = week.day(date(2025, 6, 6)).unwrap();
        assert_eq!(friday.ot, dec("6"));
        assert_eq!(week.ot_total(), dec("6"));
        assert_eq!(week.dt_total(), dec("0"));
    }

    /// WS-009: the reporting cap applies after the overflow walk
    #[test]
    fn test_reporting_cap_applied_last() {
        let policy = OvertimePolicy {
            daily_ot_reporting_cap: Some(dec("4")),
            ..three_tier_policy()
        };
        let entries = weekday_entries("10");
        let week = compute_week_overtime(&entries, sunday(), &policy, &codes());
        let friday = week.day(date(2025, 6, 6)).unwrap();
        // Friday's overflow-boosted 10 OT hours report as 4 OT + 6 DT
        assert_eq!(friday.ot, dec("4"));
        assert_eq!(friday.dt, dec("6"));
        // Total allocation is conserved
        let total: Decimal = week.days.iter().map(|d| d.regular() + d.ot + d.dt).sum();
        assert_eq!(total, dec("50"));
    }

    /// WS-010: a 14-hour day splits across all three tiers
    #[test]
    fn test_three_tier_day() {
        let entries = vec![TimeEntry::new(date(2025, 6, 2), "Site 14", "REG", dec("14"))];
        let week = compute_week_overtime(&entries, sunday(), &three_tier_policy(), &codes());
        let monday = week.day(date(2025, 6, 2)).unwrap();
        assert_eq!(monday.regular(), dec("8"));
        assert_eq!(monday.ot, dec("4"));
        assert_eq!(monday.dt, dec("2"));
    }
}
