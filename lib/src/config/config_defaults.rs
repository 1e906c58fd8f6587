// lib/src/config/config_defaults.rs
use std::path::PathBuf;

/// Looked up (as triage.toml, triage.yaml, ...) in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "triage";
pub const ENV_PREFIX: &str = "TRIAGE";
pub const DEFAULT_SNAPSHOT_PATH: &str = "triage_store.json";

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_snapshot_path() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_PATH)
}

pub fn default_enforce_plausible_ranges() -> bool {
    true
}
