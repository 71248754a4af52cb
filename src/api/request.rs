//! Request types for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{PayPeriod, Region, TimeEntry};
use crate::policy::PolicyOverride;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The region selecting the holiday set and overtime policy.
    pub region: RegionRequest,
    /// The pay period to calculate over.
    pub period: PeriodRequest,
    /// The time entries to categorize.
    pub entries: Vec<EntryRequest>,
    /// Optional partial policy replacing the region's inferred caps.
    #[serde(default)]
    pub policy_override: Option<PolicyOverride>,
    /// When set, statutory holiday entries are synthesized into the period
    /// before totals are computed.
    #[serde(default)]
    pub apply_stat_holidays: bool,
}

/// Region information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRequest {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// Subdivision (province/state) code.
    #[serde(default)]
    pub subdivision: String,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The sequential period number.
    pub number: u32,
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// One time entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Entry id; generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    /// The day the hours were worked.
    pub date: NaiveDate,
    /// Job reference label.
    #[serde(default)]
    pub job: String,
    /// Labour code.
    pub code: String,
    /// Hours worked.
    pub hours: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// User overtime flag.
    #[serde(default)]
    pub is_overtime: bool,
    /// User night-shift flag.
    #[serde(default)]
    pub is_night_shift: bool,
    /// Explicit skip marker.
    #[serde(default)]
    pub excluded: bool,
}

impl From<RegionRequest> for Region {
    fn from(req: RegionRequest) -> Self {
        Region::new(req.country, req.subdivision)
    }
}

impl From<PeriodRequest> for PayPeriod {
    fn from(req: PeriodRequest) -> Self {
        PayPeriod {
            number: req.number,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<EntryRequest> for TimeEntry {
    fn from(req: EntryRequest) -> Self {
        TimeEntry {
            id: req.id.unwrap_or_else(Uuid::new_v4),
            date: req.date,
            job: req.job,
            code: req.code,
            hours: req.hours,
            notes: req.notes,
            is_overtime: req.is_overtime,
            is_night_shift: req.is_night_shift,
            excluded: req.excluded,
        }
    }
}
