//! Overtime policy thresholds and the per-region preset table.
//!
//! A policy is a small data table of daily/weekly caps. Every field is
//! independently optional; an absent field means the tier is not enforced
//! for that region.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Region;

/// Daily/weekly overtime thresholds for a region.
///
/// # Example
///
/// ```
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
/// assert_eq!(policy.dt_threshold(), Some(Decimal::from(12)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePolicy {
    /// Daily straight-time cap; hours past it enter the OT band.
    #[serde(default)]
    pub daily_regular_cap: Option<Decimal>,
    /// Upper bound of the daily OT band.
    #[serde(default)]
    pub daily_ot_cap: Option<Decimal>,
    /// Double time starts after this many hours in a day.
    #[serde(default)]
    pub daily_dt_cap: Option<Decimal>,
    /// Weekly straight-time cap; excess is reclassified as OT.
    #[serde(default)]
    pub weekly_regular_cap: Option<Decimal>,
    /// Cap on the *reported* daily OT bucket; overflow rolls into DT.
    /// Unset means unconstrained.
    #[serde(default)]
    pub daily_ot_reporting_cap: Option<Decimal>,
}

impl OvertimePolicy {
    /// The threshold past which double time begins: `daily_dt_cap`, else
    /// the end of the OT band (`daily_ot_cap`).
    ///
    /// `None` means the double-time tier is not enforced: overtime past the
    /// regular cap stays in the OT band no matter how long the day runs.
    pub fn dt_threshold(&self) -> Option<Decimal> {
        self.daily_dt_cap.or(self.daily_ot_cap)
    }

    /// Returns `true` if any daily tier is enforced.
    pub fn has_daily_tiers(&self) -> bool {
        self.daily_regular_cap.is_some() || self.dt_threshold().is_some()
    }

    /// Applies a caller-supplied override on top of this policy.
    ///
    /// Each `Some` field in the override replaces the corresponding field;
    /// everything else (notably the inferred weekly cap) is retained.
    pub fn with_overrides(mut self, overrides: &PolicyOverride) -> Self {
        if let Some(cap) = overrides.daily_regular_cap {
            self.daily_regular_cap = Some(cap);
        }
        if let Some(cap) = overrides.daily_ot_cap {
            self.daily_ot_cap = Some(cap);
        }
        if let Some(cap) = overrides.daily_dt_cap {
            self.daily_dt_cap = Some(cap);
        }
        if let Some(cap) = overrides.weekly_regular_cap {
            self.weekly_regular_cap = Some(cap);
        }
        if let Some(cap) = overrides.daily_ot_reporting_cap {
            self.daily_ot_reporting_cap = Some(cap);
        }
        self
    }

    /// Validates that all present caps are non-negative and ordered.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] on a negative cap or when
    /// `daily_regular_cap` exceeds the DT threshold.
    pub fn validate(&self) -> EngineResult<()> {
        let caps = [
            ("daily_regular_cap", self.daily_regular_cap),
            ("daily_ot_cap", self.daily_ot_cap),
            ("daily_dt_cap", self.daily_dt_cap),
            ("weekly_regular_cap", self.weekly_regular_cap),
            ("daily_ot_reporting_cap", self.daily_ot_reporting_cap),
        ];
        for (name, cap) in caps {
            if let Some(value) = cap {
                if value < Decimal::ZERO {
                    return Err(EngineError::InvalidConfig {
                        message: format!("{} must be non-negative, got {}", name, value),
                    });
                }
            }
        }
        if let (Some(regular), Some(dt)) = (self.daily_regular_cap, self.dt_threshold()) {
            if regular > dt {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "daily_regular_cap {} exceeds the double-time threshold {}",
                        regular, dt
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Caller-supplied partial policy; `Some` fields replace the inferred ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyOverride {
    /// Replacement daily straight-time cap.
    #[serde(default)]
    pub daily_regular_cap: Option<Decimal>,
    /// Replacement upper bound of the daily OT band.
    #[serde(default)]
    pub daily_ot_cap: Option<Decimal>,
    /// Replacement double-time start threshold.
    #[serde(default)]
    pub daily_dt_cap: Option<Decimal>,
    /// Replacement weekly straight-time cap.
    #[serde(default)]
    pub weekly_regular_cap: Option<Decimal>,
    /// Replacement reported-OT cap.
    #[serde(default)]
    pub daily_ot_reporting_cap: Option<Decimal>,
}

/// Region-to-policy lookup table with a documented fallback default.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    default: OvertimePolicy,
    regions: HashMap<String, OvertimePolicy>,
}

impl PolicyTable {
    /// Builds a table from a default policy and per-region presets keyed by
    /// `"{country}-{subdivision}"`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if any policy fails
    /// [`OvertimePolicy::validate`].
    pub fn new(
        default: OvertimePolicy,
        regions: HashMap<String, OvertimePolicy>,
    ) -> EngineResult<Self> {
        default.validate()?;
        for policy in regions.values() {
            policy.validate()?;
        }
        Ok(Self { default, regions })
    }

    /// Returns the inferred policy for a region.
    ///
    /// Unmapped regions fall back to the table's default.
    pub fn policy_for(&self, region: &Region) -> OvertimePolicy {
        self.regions
            .get(&region.key())
            .cloned()
            .unwrap_or_else(|| self.default.clone())
    }

    /// Returns the fallback default policy.
    pub fn default_policy(&self) -> &OvertimePolicy {
        &self.default
    }
}
