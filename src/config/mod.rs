//! Configuration loading for the categorization engine.
//!
//! Configuration lives in a directory of YAML files: the labour-code map
//! and the per-region overtime policy table.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CodesConfig, EngineConfig, PoliciesConfig};
