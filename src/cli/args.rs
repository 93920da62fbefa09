//! Command-line argument definitions for shiftfix
//!
//! Defines the complete CLI interface using the clap derive API. The CLI is a
//! caller of the core processor: it owns path resolution, logging setup, and
//! the decision of where the three output streams land.

use crate::config::ProcessOptions;
use crate::constants::{
    CORRECTED_FILE_SUFFIX, DEFAULT_FRAGMENT_CEILING, ERROR_LOG_SUFFIX, ERROR_TRANSACTIONS_SUFFIX,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI arguments for the shiftfix data repair tool
///
/// Repairs "data shifting" corruption in delimiter-separated text files:
/// logical records split across physical lines by embedded newlines inside
/// qualified fields.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "shiftfix",
    version,
    about = "Repair data-shifting corruption in delimiter-separated text files",
    long_about = "Rebuilds logical records that were split across multiple physical lines \
                  because a qualified (quoted) field contains embedded newlines. Produces a \
                  corrected file, an error log describing every repair and failure, and an \
                  error-transactions file holding the raw text of records that could not be \
                  cleanly rebuilt."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Repair a delimiter-separated text file (main command)
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the input text file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the corrected output file
    ///
    /// Defaults to the input path with `_corrected.txt` appended.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path for the error log file
    ///
    /// Defaults to the input path with `_errors.log` appended. Only written
    /// when the run produced repairs or errors.
    #[arg(long = "error-log", value_name = "PATH")]
    pub error_log: Option<PathBuf>,

    /// Path for the error-transactions file
    ///
    /// Receives the raw pre-normalization text of records that could not be
    /// cleanly rebuilt, header first. Only written when such records exist.
    #[arg(long = "error-transactions", value_name = "PATH")]
    pub error_transactions: Option<PathBuf>,

    /// Column delimiter (auto-detected from the header when omitted)
    #[arg(short = 'd', long = "delimiter", value_name = "STRING")]
    pub delimiter: Option<String>,

    /// Text qualifier character (auto-detected from the header when omitted)
    #[arg(short = 'Q', long = "qualifier", value_name = "CHAR")]
    pub qualifier: Option<char>,

    /// Maximum physical lines merged into one logical record
    #[arg(
        long = "fragment-ceiling",
        value_name = "N",
        default_value_t = DEFAULT_FRAGMENT_CEILING
    )]
    pub fragment_ceiling: usize,

    /// Drop error-flagged records from the corrected output
    ///
    /// By default flagged records are still emitted so row counts stay
    /// aligned for downstream consumers.
    #[arg(long = "suppress-flagged")]
    pub suppress_flagged: bool,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Append a suffix to a path's final component
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

impl ProcessArgs {
    /// Validate arguments before processing
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        self.to_options().validate()
    }

    /// Build core processing options from the CLI surface
    pub fn to_options(&self) -> ProcessOptions {
        ProcessOptions {
            delimiter: self.delimiter.clone(),
            qualifier: self.qualifier,
            fragment_ceiling: self.fragment_ceiling,
            emit_flagged: !self.suppress_flagged,
        }
    }

    /// Resolved corrected-output path
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| with_suffix(&self.input, CORRECTED_FILE_SUFFIX))
    }

    /// Resolved error-log path
    pub fn error_log_path(&self) -> PathBuf {
        self.error_log
            .clone()
            .unwrap_or_else(|| with_suffix(&self.input, ERROR_LOG_SUFFIX))
    }

    /// Resolved error-transactions path
    pub fn error_transactions_path(&self) -> PathBuf {
        self.error_transactions
            .clone()
            .unwrap_or_else(|| with_suffix(&self.input, ERROR_TRANSACTIONS_SUFFIX))
    }

    /// Get the effective log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(input: PathBuf) -> ProcessArgs {
        ProcessArgs {
            input,
            output: None,
            error_log: None,
            error_transactions: None,
            delimiter: None,
            qualifier: None,
            fragment_ceiling: DEFAULT_FRAGMENT_CEILING,
            suppress_flagged: false,
            verbose: 0,
            quiet: false,
        }
    }

    fn temp_input() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\"a\"|^|\"b\"").unwrap();
        file
    }

    #[test]
    fn test_validation_requires_existing_input() {
        let args = args_for(PathBuf::from("/nonexistent/input.txt"));
        assert!(args.validate().is_err());

        let file = temp_input();
        let args = args_for(file.path().to_path_buf());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_options() {
        let file = temp_input();
        let mut args = args_for(file.path().to_path_buf());
        args.fragment_ceiling = 0;
        assert!(args.validate().is_err());

        let mut args = args_for(file.path().to_path_buf());
        args.delimiter = Some(String::new());
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_default_output_paths_derive_from_input() {
        let args = args_for(PathBuf::from("/data/export.txt"));
        assert_eq!(
            args.output_path(),
            PathBuf::from("/data/export.txt_corrected.txt")
        );
        assert_eq!(
            args.error_log_path(),
            PathBuf::from("/data/export.txt_errors.log")
        );
        assert_eq!(
            args.error_transactions_path(),
            PathBuf::from("/data/export.txt_error_transactions.txt")
        );
    }

    #[test]
    fn test_explicit_paths_win() {
        let mut args = args_for(PathBuf::from("/data/export.txt"));
        args.output = Some(PathBuf::from("/out/fixed.txt"));
        args.error_log = Some(PathBuf::from("/out/errs.log"));
        assert_eq!(args.output_path(), PathBuf::from("/out/fixed.txt"));
        assert_eq!(args.error_log_path(), PathBuf::from("/out/errs.log"));
    }

    #[test]
    fn test_log_level() {
        let mut args = args_for(PathBuf::from("x"));
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_suppress_flag_maps_to_options() {
        let mut args = args_for(PathBuf::from("x"));
        assert!(args.to_options().emit_flagged);

        args.suppress_flagged = true;
        assert!(!args.to_options().emit_flagged);
    }
}
