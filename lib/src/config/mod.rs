// lib/src/config/mod.rs

pub mod config_defaults;
pub mod config_structs;

use std::path::Path;

use ::config::{Config, Environment, File};
use log::debug;

use crate::errors::TriageResult;

pub use config_defaults::*;
pub use config_structs::{AppConfig, IntakeConfig, StoreConfig};

/// Builds the application config from, in increasing precedence: built-in
/// defaults, the config file, and `TRIAGE__`-prefixed environment variables
/// (`TRIAGE__STORE__SNAPSHOT_PATH=/var/lib/triage.json`).
///
/// An explicit `path` must exist; the default `triage.*` file is optional.
pub fn load_app_config(path: Option<&Path>) -> TriageResult<AppConfig> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };
    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;
    let app: AppConfig = config.try_deserialize()?;
    debug!("Loaded configuration: {:?}", app);
    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::IntakePolicy;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::Builder;

    #[test]
    fn should_fill_defaults_for_missing_keys() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "log_level = \"debug\"").unwrap();

        let config = load_app_config(Some(file.path())).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store.snapshot_path, PathBuf::from(DEFAULT_SNAPSHOT_PATH));
        assert!(config.intake.enforce_plausible_ranges);
    }

    #[test]
    fn should_read_nested_sections() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[store]\nsnapshot_path = \"/tmp/er.json\"\n\n[intake]\nenforce_plausible_ranges = false").unwrap();

        let config = load_app_config(Some(file.path())).unwrap();
        assert_eq!(config.store.snapshot_path, PathBuf::from("/tmp/er.json"));
        assert!(!config.intake.policy().enforce_plausible_ranges);
    }

    #[test]
    fn should_fail_when_explicit_file_is_missing() {
        let missing = Path::new("/nonexistent/triage-config.toml");
        assert!(load_app_config(Some(missing)).is_err());
    }

    #[test]
    fn should_default_everything() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.intake.policy(), IntakePolicy::default());
    }
}
