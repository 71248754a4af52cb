//! Configuration types deserialized from the YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{CodeCategoryMap, PayCategory};
use crate::policy::{OvertimePolicy, PolicyTable};

/// `codes.yaml` file structure: labour-code to category assignments.
#[derive(Debug, Clone, Deserialize)]
pub struct CodesConfig {
    /// Map of labour-code string to its base pay category.
    pub codes: HashMap<String, PayCategory>,
}

/// `policies.yaml` file structure: the region policy table.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliciesConfig {
    /// Fallback policy for unmapped regions.
    pub default: OvertimePolicy,
    /// Per-region presets keyed by `"{country}-{subdivision}"`.
    #[serde(default)]
    pub regions: HashMap<String, OvertimePolicy>,
}

/// The complete validated engine configuration.
///
/// Built from the raw file structures once at load time; the lookup tables
/// it carries are what the engine actually consumes.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    codes: CodeCategoryMap,
    policies: PolicyTable,
}

impl EngineConfig {
    /// Validates and assembles the configuration from its file structures.
    pub fn new(codes: CodesConfig, policies: PoliciesConfig) -> EngineResult<Self> {
        let codes = CodeCategoryMap::from_entries(codes.codes)?;
        let policies = PolicyTable::new(policies.default, policies.regions)?;
        Ok(Self { codes, policies })
    }

    /// Returns the labour-code lookup table.
    pub fn codes(&self) -> &CodeCategoryMap {
        &self.codes
    }

    /// Returns the region policy table.
    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }
}
