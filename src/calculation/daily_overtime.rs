//! Daily overtime/double-time threshold splitting.
//!
//! The split operates on a day's total worked hours, not on individual
//! entries; the per-week orchestration decides which entries feed the
//! worked base.

use rust_decimal::Decimal;

use crate::policy::OvertimePolicy;

/// A day's hours split into the OT band and the double-time band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DailySplit {
    /// Hours in the overtime band.
    pub ot: Decimal,
    /// Hours in the double-time band.
    pub dt: Decimal,
}

/// Splits a day's worked hours against the policy's daily thresholds.
///
/// - OT: hours between the daily regular cap and the double-time
///   threshold.
/// - DT: hours past the double-time threshold.
///
/// Each tier only applies when its cap is present; a policy with no daily
/// caps at all (weekly-only region) yields a zero split.
///
/// # Example
///
/// ```
/// use timecard_engine::calculation::split_daily_hours;
/// use timecard_engine::policy::OvertimePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = OvertimePolicy {
///     daily_regular_cap: Some(Decimal::from(8)),
///     daily_ot_cap: Some(Decimal::from(12)),
///     daily_dt_cap: Some(Decimal::from(12)),
///     weekly_regular_cap: Some(Decimal::from(40)),
///     daily_ot_reporting_cap: None,
/// };
///
/// let split = split_daily_hours(Decimal::from(14), &policy);
/// assert_eq!(split.ot, Decimal::from(4)); // hours 8..12
/// assert_eq!(split.dt, Decimal::from(2)); // hours past 12
/// ```
pub fn split_daily_hours(worked: Decimal, policy: &OvertimePolicy) -> DailySplit {
    if !policy.has_daily_tiers() {
        return DailySplit::default();
    }

    let dt_threshold = policy.dt_threshold();

    let ot = match policy.daily_regular_cap {
        Some(regular_cap) => {
            let ot_band_end = dt_threshold.map_or(worked, |t| worked.min(t));
            (ot_band_end - regular_cap).max(Decimal::ZERO)
        }
        None => Decimal::ZERO,
    };

    let dt = dt_threshold.map_or(Decimal::ZERO, |t| (worked - t).max(Decimal::ZERO));

    DailySplit { ot, dt }
}

/// Applies the weekly rest-day rule to the first day of the week.
///
/// All hours worked on the rest day are at least OT-rate regardless of the
/// daily threshold: the OT bucket is floored at the worked hours below the
/// double-time threshold, and any already-computed DT is preserved.
pub fn apply_sunday_rest(split: DailySplit, worked: Decimal, policy: &OvertimePolicy) -> DailySplit {
    let floor = policy.dt_threshold().map_or(worked, |t| worked.min(t));
    DailySplit {
        ot: split.ot.max(floor),
        dt: split.dt,
    }
}

/// Caps the reported daily OT bucket, rolling the overflow into DT.
///
/// A no-op when the policy leaves `daily_ot_reporting_cap` unset.
pub fn apply_reporting_cap(split: DailySplit, policy: &OvertimePolicy) -> DailySplit {
    match policy.daily_ot_reporting_cap {
        Some(cap) if split.ot > cap => DailySplit {
            ot: cap,
            dt: split.dt + (split.ot - cap),
        },
        _ => split,
    }
}
