//! Application constants for shiftfix
//!
//! This module contains default processing parameters, dialect-detection
//! candidates, and output-file naming conventions used throughout the
//! application.

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default column delimiter used by the upstream export format
pub const DEFAULT_DELIMITER: &str = "|^|";

/// Default text qualifier wrapping field values
pub const DEFAULT_QUALIFIER: char = '"';

/// Hard ceiling on physical lines merged into one logical record
///
/// Reconstruction that has not converged on the schema width after this many
/// fragments is terminated and flagged rather than allowed to swallow the
/// rest of the file.
pub const DEFAULT_FRAGMENT_CEILING: usize = 25;

/// Replacement text for a trailing doubled quote mark that denotes a
/// measurement unit (e.g. `60""` becomes `60 inches`)
pub const INCH_UNIT_TEXT: &str = " inches";

// =============================================================================
// Dialect Detection
// =============================================================================

/// Candidate delimiters checked against the header line, in priority order
pub const CANDIDATE_DELIMITERS: &[&str] = &["|^|", ",", "|", "\t", ";"];

/// Candidate text qualifiers checked against the header line
pub const CANDIDATE_QUALIFIERS: &[char] = &['"', '\''];

// =============================================================================
// Output Naming and Formatting
// =============================================================================

/// Suffix appended to the input stem for the corrected-output file
pub const CORRECTED_FILE_SUFFIX: &str = "_corrected.txt";

/// Suffix appended to the input stem for the error-log file
pub const ERROR_LOG_SUFFIX: &str = "_errors.log";

/// Suffix appended to the input stem for the error-transactions file
pub const ERROR_TRANSACTIONS_SUFFIX: &str = "_error_transactions.txt";

/// Width of the dashed rule separating error-log blocks
pub const ERROR_LOG_RULE_WIDTH: usize = 50;
