//! Categorization and threshold-allocation logic.
//!
//! This module contains the pure calculation functions of the engine:
//! entry classification under the fixed category precedence, range totals
//! with the on-call stipend, the daily overtime/double-time split, the
//! Sunday rest-day floor, weekly overflow reallocation, and the per-week
//! orchestration that ties them together.

mod classification;
mod daily_overtime;
mod range_totals;
mod week_summary;
mod weekly_overflow;

pub use classification::{classify_entry, counts_toward_totals};
pub use daily_overtime::{DailySplit, apply_reporting_cap, apply_sunday_rest, split_daily_hours};
pub use range_totals::{ON_CALL_ENTRY_RATE, WEEKLY_ON_CALL_STIPEND, calculate_range_totals};
pub use week_summary::{DayOvertime, WeekOvertime, compute_week_overtime};
pub use weekly_overflow::allocate_weekly_excess;
