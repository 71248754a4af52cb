//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CodesConfig, EngineConfig, PoliciesConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/timecard/
/// ├── codes.yaml     # Labour-code to category assignments
/// └── policies.yaml  # Region overtime policy presets + default
/// ```
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
/// use timecard_engine::models::Region;
///
/// let loader = ConfigLoader::load("./config/timecard").unwrap();
/// let policy = loader.config().policies().policy_for(&Region::new("CA", "BC"));
/// println!("BC weekly cap: {:?}", policy.weekly_regular_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or fails validation (duplicate normalized codes, negative caps).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let codes_path = path.join("codes.yaml");
        let codes = Self::load_yaml::<CodesConfig>(&codes_path)?;

        let policies_path = path.join("policies.yaml");
        let policies = Self::load_yaml::<PoliciesConfig>(&policies_path)?;

        let config = EngineConfig::new(codes, policies)?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
