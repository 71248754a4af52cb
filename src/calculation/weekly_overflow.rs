//! Weekly overflow reallocation.
//!
//! When a week's worked hours exceed the policy's weekly straight-time cap,
//! the excess is reclassified as overtime by walking the week backward from
//! its last day and consuming each day's remaining straight-time capacity.

use rust_decimal::Decimal;

use super::week_summary::DayOvertime;

/// Reallocates the week's excess over `weekly_cap` into the OT band.
///
/// Days are consumed from the last day backward; each day can only give up
/// the hours not already counted toward its OT/DT bands, so the total
/// allocation never exceeds the hours actually worked.
///
/// A week at or under the cap is left untouched.
pub fn allocate_weekly_excess(days: &mut [DayOvertime], weekly_cap: Decimal) {
    let total_worked: Decimal = days.iter().map(|d| d.worked).sum();
    let mut excess = total_worked - weekly_cap;
    if excess <= Decimal::ZERO {
        return;
    }

    for day in days.iter_mut().rev() {
        if excess <= Decimal::ZERO {
            break;
        }
        let capacity = (day.worked - day.ot - day.dt).max(Decimal::ZERO);
        let take = capacity.min(excess);
        if take > Decimal::ZERO {
            day.ot += take;
            excess -= take;
        }
    }
}
