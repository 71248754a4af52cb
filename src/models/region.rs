//! Region model used to select a holiday set and an overtime policy.

use serde::{Deserialize, Serialize};

/// A country plus subdivision (province/state) pair.
///
/// Both codes are stored normalized (trimmed, uppercased) so that regions
/// compare and key consistently.
///
/// # Example
///
/// ```
/// use timecard_engine::models::Region;
///
/// let region = Region::new("ca", " bc ");
/// assert_eq!(region.country, "CA");
/// assert_eq!(region.subdivision, "BC");
/// assert_eq!(region.key(), "CA-BC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// ISO 3166-1 alpha-2 country code (e.g. "CA").
    pub country: String,
    /// Subdivision code (e.g. "BC", "ON").
    pub subdivision: String,
}

impl Region {
    /// Creates a region with normalized codes.
    pub fn new(country: impl AsRef<str>, subdivision: impl AsRef<str>) -> Self {
        Self {
            country: country.as_ref().trim().to_uppercase(),
            subdivision: subdivision.as_ref().trim().to_uppercase(),
        }
    }

    /// Returns the `"{country}-{subdivision}"` key used for policy and
    /// cache lookups.
    pub fn key(&self) -> String {
        format!("{}-{}", self.country, self.subdivision)
    }
}
