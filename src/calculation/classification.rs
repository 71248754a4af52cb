//! Entry classification under the fixed category precedence.

use crate::models::{CodeCategoryMap, PayCategory, TimeEntry};

/// Classifies a single entry into its pay category.
///
/// The precedence order is fixed and must not be reordered:
///
/// 1. night-shift flag → Night
/// 2. code mapped to DoubleTime → DoubleTime
/// 3. code mapped to OnCall → OnCall
/// 4. overtime flag OR code mapped to Overtime → Overtime
/// 5. code mapped to Vacation → Vacation
/// 6. code mapped to Stat → Stat
/// 7. otherwise → Regular
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::classify_entry;
/// use timecard_engine::models::{CodeCategoryMap, PayCategory, TimeEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let codes = CodeCategoryMap::from_entries(vec![
///     ("DT".to_string(), PayCategory::DoubleTime),
/// ]).unwrap();
///
/// let mut entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     "Site 14",
///     "DT",
///     Decimal::from(10),
/// );
/// entry.is_night_shift = true;
///
/// // The night flag outranks the DT code
/// assert_eq!(classify_entry(&entry, &codes), PayCategory::Night);
/// ```
pub fn classify_entry(entry: &TimeEntry, codes: &CodeCategoryMap) -> PayCategory {
    if entry.is_night_shift {
        return PayCategory::Night;
    }
    let base = codes.category_for(&entry.code);
    if base == PayCategory::DoubleTime {
        return PayCategory::DoubleTime;
    }
    if base == PayCategory::OnCall {
        return PayCategory::OnCall;
    }
    if entry.is_overtime || base == PayCategory::Overtime {
        return PayCategory::Overtime;
    }
    match base {
        PayCategory::Vacation => PayCategory::Vacation,
        PayCategory::Stat => PayCategory::Stat,
        _ => PayCategory::Regular,
    }
}

/// Returns `true` if the entry contributes to range totals.
///
/// On top of the hard exclusions ([`TimeEntry::is_countable`]), a
/// Regular-classified entry with a blank job label is an unfilled
/// placeholder row and is skipped; a Stat-classified entry with a blank
/// job is still a valid holiday entry.
pub fn counts_toward_totals(entry: &TimeEntry, codes: &CodeCategoryMap) -> bool {
    if !entry.is_countable() {
        return false;
    }
    !(classify_entry(entry, codes) == PayCategory::Regular && entry.has_blank_job())
}
