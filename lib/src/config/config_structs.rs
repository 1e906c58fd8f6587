// lib/src/config/config_structs.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::config_defaults::*;
use crate::intake::IntakePolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default `env_logger` filter when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default = "default_enforce_plausible_ranges")]
    pub enforce_plausible_ranges: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: default_log_level(),
            store: StoreConfig::default(),
            intake: IntakeConfig::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { snapshot_path: default_snapshot_path() }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        IntakeConfig { enforce_plausible_ranges: default_enforce_plausible_ranges() }
    }
}

impl IntakeConfig {
    pub fn policy(&self) -> IntakePolicy {
        IntakePolicy { enforce_plausible_ranges: self.enforce_plausible_ranges }
    }
}
