//! Statutory holiday entry insertion, normalization, and removal.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    DateRange, HOLIDAY_CODE, HOLIDAY_JOB_LABEL, LEGACY_HOLIDAY_CODE, TimeEntry,
};

/// Hours credited to a synthesized holiday entry.
pub const HOLIDAY_ENTRY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Job labels treated as unfilled on pre-existing holiday entries.
const GENERIC_HOLIDAY_LABEL: &str = "holiday";

/// Inserts holiday entries for every holiday date in `range` and
/// normalizes the pre-existing ones.
///
/// Pre-existing H/STAT-coded entries in range get their job forced to
/// `"Stat"` when blank or a generic "holiday" label, and the legacy
/// `"STAT"` code rewritten to `"H"`. Then every holiday date without an
/// H/STAT entry receives a synthesized 8-hour entry.
///
/// Idempotent: a second call over the same range inserts nothing new.
pub fn apply_stat_holidays(
    entries: &mut Vec<TimeEntry>,
    holiday_dates: &BTreeSet<NaiveDate>,
    range: DateRange,
) {
    for entry in entries
        .iter_mut()
        .filter(|e| range.contains(e.date) && e.is_holiday_placeholder())
    {
        if entry.has_blank_job() || entry.job.trim().eq_ignore_ascii_case(GENERIC_HOLIDAY_LABEL) {
            entry.job = HOLIDAY_JOB_LABEL.to_string();
        }
        if entry.normalized_code() == LEGACY_HOLIDAY_CODE {
            entry.code = HOLIDAY_CODE.to_string();
        }
    }

    for date in holiday_dates.iter().filter(|d| range.contains(**d)) {
        let already_present = entries
            .iter()
            .any(|e| e.date == *date && e.is_holiday_placeholder());
        if !already_present {
            entries.push(TimeEntry::new(
                *date,
                HOLIDAY_JOB_LABEL,
                HOLIDAY_CODE,
                HOLIDAY_ENTRY_HOURS,
            ));
        }
    }
}

/// Removes H/STAT-coded entries whose date is a holiday within `range`.
///
/// Entries carrying those codes on non-holiday dates are untouched, as is
/// everything outside the range.
pub fn remove_stat_holidays(
    entries: &mut Vec<TimeEntry>,
    holiday_dates: &BTreeSet<NaiveDate>,
    range: DateRange,
) {
    entries.retain(|e| {
        !(range.contains(e.date) && e.is_holiday_placeholder() && holiday_dates.contains(&e.date))
    });
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

    fn july_range() -> DateRange {
        DateRange::new(date(2025, 6, 29), date(2025, 7, 12))
    }

    fn july_holidays() -> BTreeSet<NaiveDate> {
        BTreeSet::from([date(2025, 7, 1)])
    }

    /// HL-001: a bare range gains one entry per holiday date
    #[test]
    fn test_inserts_missing_holiday_entries() {
        let mut entries = vec![TimeEntry::new(date(2025, 6, 30), "Site 14", "REG", dec("8"))];
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());

        assert_eq!(entries.len(), 2);
        let inserted = entries.iter().find(|e| e.date == date(2025, 7, 1)).unwrap();
        assert_eq!(inserted.job, "Stat");
        assert_eq!(inserted.code, "H");
        assert_eq!(inserted.hours, dec("8"));
    }

    /// HL-002: idempotence, the second call inserts nothing
    #[test]
    fn test_apply_twice_inserts_once() {
        let mut entries = Vec::new();
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries.len(), 1);
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries.len(), 1);
    }

    /// HL-003: pre-existing legacy entries are normalized, not duplicated
    #[test]
    fn test_normalizes_legacy_entries() {
        let mut entries = vec![
            TimeEntry::new(date(2025, 7, 1), "", "STAT", dec("8")),
        ];
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].job, "Stat");
        assert_eq!(entries[0].code, "H");
    }

    /// HL-004: a generic "holiday" job label is rewritten
    #[test]
    fn test_normalizes_generic_holiday_label() {
        let mut entries = vec![TimeEntry::new(date(2025, 7, 1), "Holiday", "H", dec("8"))];
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries[0].job, "Stat");
    }

    /// HL-005: a meaningful job label on a holiday entry is preserved
    #[test]
    fn test_preserves_meaningful_job_label() {
        let mut entries = vec![TimeEntry::new(date(2025, 7, 1), "Site 14", "H", dec("8"))];
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries[0].job, "Site 14");
    }

    /// HL-006: removal deletes only holiday-dated placeholder entries
    #[test]
    fn test_remove_targets_holiday_dates_only() {
        let mut entries = vec![
            TimeEntry::new(date(2025, 7, 1), "Stat", "H", dec("8")),
            // Same code on a non-holiday date: untouched
            TimeEntry::new(date(2025, 7, 3), "Stat", "H", dec("8")),
            TimeEntry::new(date(2025, 7, 2), "Site 14", "REG", dec("8")),
        ];
        remove_stat_holidays(&mut entries, &july_holidays(), july_range());

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.date != date(2025, 7, 1)));
    }

    /// HL-007: add-then-remove round-trips to the original entries
    #[test]
    fn test_add_remove_round_trip() {
        let worked = TimeEntry::new(date(2025, 6, 30), "Site 14", "REG", dec("8"));
        let mut entries = vec![worked.clone()];

        apply_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries.len(), 2);

        remove_stat_holidays(&mut entries, &july_holidays(), july_range());
        assert_eq!(entries, vec![worked]);
    }

    /// HL-008: entries outside the range are never touched
    #[test]
    fn test_range_is_respected() {
        let outside = TimeEntry::new(date(2025, 8, 4), "", "STAT", dec("8"));
        let mut entries = vec![outside.clone()];
        apply_stat_holidays(&mut entries, &july_holidays(), july_range());

        // Not normalized, and the July 1 insertion still happened
        assert!(entries.contains(&outside));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_remove_ignores_dates_outside_range() {
        let mut entries = vec![TimeEntry::new(date(2025, 7, 1), "Stat", "H", dec("8"))];
        let narrow = DateRange::new(date(2025, 7, 5), date(2025, 7, 12));
        remove_stat_holidays(&mut entries, &july_holidays(), narrow);
        assert_eq!(entries.len(), 1);
    }
}
