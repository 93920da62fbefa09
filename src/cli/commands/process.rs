//! Process command implementation
//!
//! Runs one repair invocation end to end: validate arguments, process the
//! input file, persist the three output streams, and report a summary. The
//! error log and error-transactions files are only written when they have
//! content; their absence means no errors were found, never a failure.

use super::shared::{print_summary, setup_logging};
use crate::app::models::{ProcessOutput, ProcessSummary};
use crate::app::services::shift_processor::ShiftProcessor;
use crate::cli::args::ProcessArgs;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Run the process command
pub fn run_process(args: ProcessArgs) -> Result<ProcessSummary> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting shiftfix");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let processor = ShiftProcessor::new(args.to_options())?;
    let output = processor.process_file(&args.input)?;

    write_outputs(&args, &output)?;

    if !args.quiet {
        print_summary(&output.summary, start_time.elapsed());
    }

    Ok(output.summary)
}

/// Persist the three output streams
fn write_outputs(args: &ProcessArgs, output: &ProcessOutput) -> Result<()> {
    let corrected_path = args.output_path();
    write_lines(&corrected_path, &output.corrected)?;
    info!("Corrected data written to {}", corrected_path.display());

    if output.error_log.is_empty() {
        info!("No errors found; error log not written");
    } else {
        let error_log_path = args.error_log_path();
        write_lines(&error_log_path, &output.error_log)?;
        info!("Error log written to {}", error_log_path.display());
    }

    if output.error_transactions.is_empty() {
        info!("No error transactions found");
    } else {
        let transactions_path = args.error_transactions_path();
        write_lines(&transactions_path, &output.error_transactions)?;
        info!(
            "Error transactions written to {}",
            transactions_path.display()
        );
    }

    Ok(())
}

/// Write lines to a file, newline-terminated
fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(path, content)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}
