// lib/tests/config_env.rs

// Environment overrides live in their own test binary so the variables never
// leak into the file-only config tests in the library.
use std::io::Write;
use std::path::PathBuf;

use ertriage::config::load_app_config;
use tempfile::Builder;

#[test]
fn should_let_environment_override_config_file() {
    let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "log_level = \"warn\"\n\n[store]\nsnapshot_path = \"/tmp/from-file.json\"\n\n[intake]\nenforce_plausible_ranges = true"
    )
    .unwrap();

    std::env::set_var("TRIAGE__STORE__SNAPSHOT_PATH", "/tmp/from-env.json");
    std::env::set_var("TRIAGE__INTAKE__ENFORCE_PLAUSIBLE_RANGES", "false");
    let loaded = load_app_config(Some(file.path()));
    std::env::remove_var("TRIAGE__STORE__SNAPSHOT_PATH");
    std::env::remove_var("TRIAGE__INTAKE__ENFORCE_PLAUSIBLE_RANGES");

    let config = loaded.unwrap();
    assert_eq!(config.store.snapshot_path, PathBuf::from("/tmp/from-env.json"));
    assert!(!config.intake.enforce_plausible_ranges);
    assert_eq!(config.log_level, "warn");
}
