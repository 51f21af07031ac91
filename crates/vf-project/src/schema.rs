//! Run configuration file schema.

use serde::{Deserialize, Serialize};
use vf_sim::SimulationConfig;

pub const LATEST_VERSION: u32 = 1;

/// A named, versioned simulation configuration as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub simulation: SimulationConfig,
}

impl ConfigFile {
    pub fn new(name: impl Into<String>, simulation: SimulationConfig) -> Self {
        Self {
            version: LATEST_VERSION,
            name: name.into(),
            description: None,
            simulation,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
