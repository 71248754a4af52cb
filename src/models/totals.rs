//! Aggregated hour totals for a range of entries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category-classified hour totals for a day, week, or pay period.
///
/// The on-call fields keep two bookkeeping paths: `on_call` hours are also
/// mirrored into `overtime` for aggregate display, while the stipend amounts
/// are tracked in currency fields of their own.
///
/// # Example
///
/// ```
/// use timecard_engine::models::SummaryTotals;
/// use rust_decimal::Decimal;
///
/// let mut totals = SummaryTotals::default();
/// totals.regular = Decimal::new(400, 1); // 40.0
/// totals.overtime = Decimal::new(50, 1); // 5.0
/// assert_eq!(totals.total_hours(), Decimal::new(450, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    /// Straight-time hours.
    pub regular: Decimal,
    /// Overtime hours (includes mirrored on-call hours).
    pub overtime: Decimal,
    /// Double-time hours.
    pub double_time: Decimal,
    /// Vacation hours.
    pub vacation: Decimal,
    /// Night-shift hours.
    pub night: Decimal,
    /// Statutory holiday hours.
    pub stat: Decimal,
    /// On-call hours, counted separately for stipend computation.
    pub on_call: Decimal,
    /// Flat weekly on-call stipend total (currency).
    pub on_call_bonus: Decimal,
    /// Secondary per-entry on-call amount (currency), shown alongside the
    /// stipend but never summed into [`on_call_bonus`](Self::on_call_bonus).
    pub on_call_entry_bonus: Decimal,
}

impl SummaryTotals {
    /// Total hours across the six primary buckets.
    ///
    /// On-call hours are not added again here; they already surface through
    /// the overtime bucket.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.overtime + self.double_time + self.vacation + self.night + self.stat
    }
}
