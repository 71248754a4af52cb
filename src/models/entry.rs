//! Time entry model.
//!
//! This module defines the [`TimeEntry`] struct, the only mutable state the
//! engine reads. Entries are created by user input or synthesized by holiday
//! auto-insertion.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Labour code marking an entry as a statutory holiday placeholder.
pub const HOLIDAY_CODE: &str = "H";

/// Legacy spelling of [`HOLIDAY_CODE`] still found in old timecards.
/// Normalized to `"H"` when holidays are applied to a period.
pub const LEGACY_HOLIDAY_CODE: &str = "STAT";

/// Job label forced onto holiday placeholder entries.
pub const HOLIDAY_JOB_LABEL: &str = "Stat";

/// Legacy skip marker: entries recorded with exactly this many hours are
/// excluded from every aggregate.
///
/// Old timecards used the value itself as the marker; new code should set
/// [`TimeEntry::excluded`] instead.
// TODO: migrate legacy 600-hour marker rows to the `excluded` flag and drop
// this constant.
pub const LEGACY_SKIP_HOURS: Decimal = Decimal::from_parts(600, 0, 0, false, 0);

/// A single day's work record.
///
/// # Example
///
/// ```
/// use timecard_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::new(
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     "Site 14",
///     "REG",
///     Decimal::new(80, 1), // 8.0
/// );
/// assert!(entry.is_countable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The day the hours were worked (day granularity).
    pub date: NaiveDate,
    /// Job reference label (e.g. a site or project name).
    pub job: String,
    /// Labour code selecting the base pay category.
    pub code: String,
    /// Hours worked; non-negative.
    pub hours: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
    /// Whether the user flagged this entry as overtime.
    #[serde(default)]
    pub is_overtime: bool,
    /// Whether the user flagged this entry as a night shift.
    #[serde(default)]
    pub is_night_shift: bool,
    /// Explicit skip marker; excluded entries never reach any aggregate.
    #[serde(default)]
    pub excluded: bool,
}

impl TimeEntry {
    /// Creates a new entry with a fresh id and no flags set.
    pub fn new(
        date: NaiveDate,
        job: impl Into<String>,
        code: impl Into<String>,
        hours: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            job: job.into(),
            code: code.into(),
            hours,
            notes: String::new(),
            is_overtime: false,
            is_night_shift: false,
            excluded: false,
        }
    }

    /// Returns the labour code normalized for lookup (trimmed, uppercased).
    pub fn normalized_code(&self) -> String {
        self.code.trim().to_uppercase()
    }

    /// Returns `true` if the entry carries a holiday placeholder code
    /// (`"H"` or the legacy `"STAT"`), in any case or spacing.
    pub fn is_holiday_placeholder(&self) -> bool {
        let code = self.normalized_code();
        code == HOLIDAY_CODE || code == LEGACY_HOLIDAY_CODE
    }

    /// Returns `true` if the entry may contribute to aggregates at all.
    ///
    /// An entry is dropped from every total when its labour code is blank,
    /// when it is explicitly [`excluded`](Self::excluded), or when its hours
    /// equal the legacy skip marker [`LEGACY_SKIP_HOURS`].
    pub fn is_countable(&self) -> bool {
        !self.excluded && !self.code.trim().is_empty() && self.hours != LEGACY_SKIP_HOURS
    }

    /// Returns `true` if the job label is blank (an unfilled placeholder row).
    pub fn has_blank_job(&self) -> bool {
        self.job.trim().is_empty()
    }
}
