//! Command implementations for the shiftfix CLI
//!
//! Each command lives in its own module; shared logging and reporting helpers
//! are in [`shared`].

pub mod process;
pub mod shared;

use crate::Result;
use crate::app::models::ProcessSummary;
use crate::cli::args::Commands;

/// Dispatch a parsed subcommand to its handler
pub fn run(command: Commands) -> Result<ProcessSummary> {
    match command {
        Commands::Process(process_args) => process::run_process(process_args),
    }
}
