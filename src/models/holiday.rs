//! Statutory holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A statutory holiday entitling paid time off.
///
/// Observed variants (a weekend holiday recognized on the following Monday)
/// are separate list entries with [`is_observed`](Self::is_observed) set,
/// never mutations of the base date.
///
/// # Example
///
/// ```
/// use timecard_engine::models::StatHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = StatHoliday {
///     name: "Canada Day".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     is_observed: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatHoliday {
    /// The name of the holiday (e.g. "Canada Day").
    pub name: String,
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Whether this is the observed (weekday-shifted) variant.
    #[serde(default)]
    pub is_observed: bool,
}

impl StatHoliday {
    /// Creates a base (non-observed) holiday.
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
            is_observed: false,
        }
    }

    /// Creates the observed sibling of a holiday, named "{name} (Observed)".
    pub fn observed(name: &str, date: NaiveDate) -> Self {
        Self {
            name: format!("{} (Observed)", name),
            date,
            is_observed: true,
        }
    }
}
