//! Shared helpers for CLI commands
//!
//! Logging setup and summary reporting used across command implementations.

use crate::Result;
use crate::app::models::ProcessSummary;
use colored::Colorize;
use indicatif::HumanDuration;
use std::time::Duration;

/// Set up structured logging for a command run
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shiftfix={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Print the end-of-run summary block
pub fn print_summary(summary: &ProcessSummary, elapsed: Duration) {
    println!("\n{}", "Repair Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Lines read:".bright_cyan(),
        summary.total_lines.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Records emitted:".bright_cyan(),
        summary.records_emitted.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Records fixed:".bright_cyan(),
        summary.records_fixed.to_string().bright_white()
    );
    if summary.records_errored > 0 {
        println!(
            "  {} {}",
            "Records errored:".bright_red(),
            summary.records_errored.to_string().bright_red().bold()
        );
    }
    if summary.blank_lines > 0 {
        println!(
            "  {} {}",
            "Blank lines skipped:".bright_cyan(),
            summary.blank_lines.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Time elapsed:".bright_cyan(),
        HumanDuration(elapsed).to_string().bright_white()
    );
}
