// server/src/cli/mod.rs

pub mod cli;
pub mod commands;
pub mod display;
pub mod handlers;

pub use cli::{run_against_snapshot, start_cli};
pub use commands::{CliArgs, TriageCommands, VitalsArgs};
pub use handlers::{execute, CommandOutcome};
