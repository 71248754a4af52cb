//! Range totals: bucket sums plus the on-call stipend.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::date_math::week_start;
use crate::models::{CodeCategoryMap, DateRange, PayCategory, SummaryTotals, TimeEntry};

use super::classification::{classify_entry, counts_toward_totals};

/// Flat stipend credited once per week that contains at least one on-call
/// entry, regardless of that entry's hour value.
pub const WEEKLY_ON_CALL_STIPEND: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Secondary per-entry on-call amount, tracked for display only and never
/// summed into the weekly stipend.
pub const ON_CALL_ENTRY_RATE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Sums the entries falling in `range` into category buckets.
///
/// Exclusions are applied first (blank code, explicit skip flag, the legacy
/// 600-hour marker, blank-job Regular rows), then each surviving entry is
/// classified once and its hours land in exactly one bucket. The exception
/// is on-call hours, which also accumulate into the overtime bucket for
/// aggregate display while staying separately countable for the stipend.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::calculate_range_totals;
/// use timecard_engine::models::{CodeCategoryMap, DateRange, PayCategory, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let codes = CodeCategoryMap::from_entries(vec![
///     ("REG".to_string(), PayCategory::Regular),
/// ]).unwrap();
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let entries = vec![TimeEntry::new(day, "Site 14", "REG", Decimal::from(8))];
/// let range = DateRange::new(day, day);
///
/// let totals = calculate_range_totals(&entries, range, &codes);
/// assert_eq!(totals.regular, Decimal::from(8));
/// ```
pub fn calculate_range_totals(
    entries: &[TimeEntry],
    range: DateRange,
    codes: &CodeCategoryMap,
) -> SummaryTotals {
    let mut totals = SummaryTotals::default();
    let mut on_call_weeks: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut on_call_entries: i64 = 0;

    for entry in entries.iter().filter(|e| range.contains(e.date)) {
        if !counts_toward_totals(entry, codes) {
            continue;
        }
        match classify_entry(entry, codes) {
            PayCategory::Regular => totals.regular += entry.hours,
            PayCategory::Overtime => totals.overtime += entry.hours,
            PayCategory::DoubleTime => totals.double_time += entry.hours,
            PayCategory::Vacation => totals.vacation += entry.hours,
            PayCategory::Night => totals.night += entry.hours,
            PayCategory::Stat => totals.stat += entry.hours,
            PayCategory::OnCall => {
                totals.on_call += entry.hours;
                // Mirrored into overtime for aggregate display; the stipend
                // bookkeeping below stays independent of this.
                totals.overtime += entry.hours;
                on_call_weeks.insert(week_start(entry.date));
                on_call_entries += 1;
            }
        }
    }

    totals.on_call_bonus = WEEKLY_ON_CALL_STIPEND * Decimal::from(on_call_weeks.len() as i64);
    totals.on_call_entry_bonus = ON_CALL_ENTRY_RATE * Decimal::from(on_call_entries);
    totals
}
