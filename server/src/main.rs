// server/src/main.rs

// Entry point for the triage command-line tool. Argument parsing, logging
// setup and dispatch all live in the cli module.

use anyhow::Result;
use triage_server::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    start_cli().await
}
