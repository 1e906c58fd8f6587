// server/src/cli/cli.rs

// Main entry point for triage-cli: parse arguments, load configuration,
// initialize logging, open the store snapshot and dispatch the command.
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use ertriage::config::load_app_config;
use ertriage::store::{load_snapshot, save_snapshot};
use ertriage::{IntakePolicy, IntakeService};

use crate::cli::commands::{CliArgs, TriageCommands};
use crate::cli::handlers::{execute, CommandOutcome};

pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();

    let config = load_app_config(args.config.as_deref()).context("Failed to load configuration")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();
    debug!("Running {:?}", args.command);

    let outcome = run_against_snapshot(&args.command, &config.store.snapshot_path, config.intake.policy()).await?;
    println!("{}", outcome.output);
    Ok(())
}

/// Opens the snapshot at `snapshot_path`, runs one command and writes the
/// snapshot back if the command changed anything.
pub async fn run_against_snapshot(
    command: &TriageCommands,
    snapshot_path: &Path,
    policy: IntakePolicy,
) -> Result<CommandOutcome> {
    let store = load_snapshot(snapshot_path)
        .await
        .with_context(|| format!("Failed to open store snapshot {}", snapshot_path.display()))?;
    let service = IntakeService::new(store, policy);

    let outcome = execute(command, &service).await?;

    if command.is_mutation() {
        save_snapshot(service.store(), snapshot_path)
            .await
            .with_context(|| format!("Failed to write store snapshot {}", snapshot_path.display()))?;
        debug!("Saved store snapshot to {}", snapshot_path.display());
    }
    Ok(outcome)
}
