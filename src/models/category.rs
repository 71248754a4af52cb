//! Pay categories and the labour-code lookup table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Classification bucket for hours.
///
/// The categorization precedence over these buckets is fixed; see
/// [`crate::calculation::classify_entry`].
///
/// # Example
///
/// ```
/// use timecard_engine::models::PayCategory;
///
/// let category = PayCategory::Regular;
/// assert_eq!(format!("{:?}", category), "Regular");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Straight-time hours.
    Regular,
    /// Overtime hours (time-and-a-half band).
    Overtime,
    /// Double-time hours.
    DoubleTime,
    /// Paid vacation hours.
    Vacation,
    /// Night-shift hours.
    Night,
    /// Statutory holiday hours.
    Stat,
    /// On-call hours (also mirrored into the overtime bucket for display).
    OnCall,
}

/// Validated mapping from labour-code strings to base pay categories.
///
/// Built once at configuration time; lookups normalize the code (trim +
/// uppercase) and unknown codes deterministically resolve to
/// [`PayCategory::Regular`].
///
/// # Example
///
/// ```
/// use timecard_engine::models::{CodeCategoryMap, PayCategory};
///
/// let map = CodeCategoryMap::from_entries(vec![
///     ("REG".to_string(), PayCategory::Regular),
///     ("OT".to_string(), PayCategory::Overtime),
/// ]).unwrap();
///
/// assert_eq!(map.category_for(" ot "), PayCategory::Overtime);
/// assert_eq!(map.category_for("UNKNOWN"), PayCategory::Regular);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeCategoryMap {
    map: HashMap<String, PayCategory>,
}

impl CodeCategoryMap {
    /// Builds the lookup table, normalizing every key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if two keys collapse to the
    /// same normalized form with different categories, or if a key is blank.
    pub fn from_entries<I>(entries: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = (String, PayCategory)>,
    {
        let mut map = HashMap::new();
        for (code, category) in entries {
            let normalized = code.trim().to_uppercase();
            if normalized.is_empty() {
                return Err(EngineError::InvalidConfig {
                    message: "blank labour code in category map".to_string(),
                });
            }
            if let Some(existing) = map.insert(normalized.clone(), category) {
                if existing != category {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "labour code '{}' maps to both {:?} and {:?}",
                            normalized, existing, category
                        ),
                    });
                }
            }
        }
        Ok(Self { map })
    }

    /// Returns the base category for a labour code.
    ///
    /// Unknown codes resolve to [`PayCategory::Regular`].
    pub fn category_for(&self, code: &str) -> PayCategory {
        let normalized = code.trim().to_uppercase();
        self.map
            .get(&normalized)
            .copied()
            .unwrap_or(PayCategory::Regular)
    }

    /// Returns the number of mapped codes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no codes are mapped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
