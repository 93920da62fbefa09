//! Shiftfix Library
//!
//! A Rust library for repairing "data shifting" corruption in
//! delimiter-separated text files: logical records that were split across
//! multiple physical lines because a qualified (quoted) field contains
//! embedded newlines.
//!
//! This library provides tools for:
//! - Counting logical columns with full text-qualifier awareness
//! - Rebuilding logical records from line fragments with bounded lookahead
//! - Disambiguating doubled quote marks (inch measurements vs embedded quotes)
//! - Normalizing whitespace inside reconstructed qualified fields
//! - Routing records to corrected / error-log / error-transaction streams
//! - Comprehensive error handling with per-record degradation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_normalizer;
        pub mod record_emitter;
        pub mod record_rebuilder;
        pub mod shift_processor;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LogicalRecord, ProcessOutput, ProcessSummary, RecordFlaw};
pub use app::services::shift_processor::ShiftProcessor;
pub use config::ProcessOptions;

/// Result type alias for shiftfix operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for shiftfix operations
///
/// Per-record anomalies are never represented here; they degrade to flagged
/// emissions on the error streams. Only conditions that prevent the run from
/// producing any output at all surface as an `Error`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input contained no lines (no header to derive a schema width from)
    #[error("Input is empty: {path}")]
    EmptyInput { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an empty-input error
    pub fn empty_input(path: impl Into<String>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
