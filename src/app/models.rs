//! Core data model for record reconstruction
//!
//! Defines the logical record built from one or more physical lines, the
//! non-fatal flaw taxonomy attached to records that could not be cleanly
//! reconstructed, and the summary/output structures returned to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal flaw attached to a record that failed clean reconstruction
///
/// Flawed records are still emitted (unless suppression is enabled); the flaw
/// selects the error-log diagnostic and routes the raw text to the
/// error-transactions stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordFlaw {
    /// Input ended while a qualifier region was still open
    UnterminatedQualifier,

    /// Reconstruction did not converge within the fragment ceiling
    FragmentCeilingExceeded,

    /// Final column count does not equal the schema width
    ColumnCountMismatch { expected: usize, found: usize },
}

impl RecordFlaw {
    /// Stable reason code used in error-log diagnostics
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::UnterminatedQualifier => "UnterminatedQualifier",
            Self::FragmentCeilingExceeded => "FragmentCeilingExceeded",
            Self::ColumnCountMismatch { .. } => "ColumnCountMismatch",
        }
    }
}

impl fmt::Display for RecordFlaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedQualifier => {
                write!(f, "input ended inside an open qualifier")
            }
            Self::FragmentCeilingExceeded => {
                write!(f, "fragment ceiling reached before column count converged")
            }
            Self::ColumnCountMismatch { expected, found } => {
                write!(f, "expected {} columns, found {}", expected, found)
            }
        }
    }
}

/// One logical record rebuilt from one or more consecutive physical lines
///
/// Owns its raw fragment lines exactly as read (pre-normalization); the
/// joined form is produced on demand. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalRecord {
    /// Raw physical lines consumed by this record, in input order
    pub fragments: Vec<String>,

    /// 1-based line number of the first fragment
    pub start_line: usize,

    /// Column count of the joined text at the end of reconstruction
    pub column_count: usize,

    /// Flaw classification, `None` for cleanly reconstructed records
    pub flaw: Option<RecordFlaw>,
}

impl LogicalRecord {
    /// Number of physical lines consumed
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// 1-based line number of the last fragment
    pub fn end_line(&self) -> usize {
        self.start_line + self.fragments.len().saturating_sub(1)
    }

    /// Raw joined text: fragments joined with a single space, matching the
    /// join applied where a line break occurred inside an open qualifier
    pub fn text(&self) -> String {
        self.fragments.join(" ")
    }

    /// Whether the record reconstructed cleanly
    pub fn is_clean(&self) -> bool {
        self.flaw.is_none()
    }

    /// Whether a clean record needed more than one physical line
    pub fn was_repaired(&self) -> bool {
        self.is_clean() && self.fragments.len() > 1
    }
}

/// Summary counters returned to the caller after a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Total physical lines read, header and blank lines included
    pub total_lines: usize,

    /// Blank lines skipped without joining any record
    pub blank_lines: usize,

    /// Logical records emitted (header excluded)
    pub records_emitted: usize,

    /// Clean records that consumed more than one physical line
    pub records_fixed: usize,

    /// Records flagged with a flaw
    pub records_errored: usize,
}

impl ProcessSummary {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} lines -> {} records | fixed: {} | errored: {} | blank skipped: {}",
            self.total_lines,
            self.records_emitted,
            self.records_fixed,
            self.records_errored,
            self.blank_lines
        )
    }
}

/// Complete result of one repair invocation
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Corrected records, header first
    pub corrected: Vec<String>,

    /// Human-readable repair audit and error diagnostics
    pub error_log: Vec<String>,

    /// Raw pre-normalization text of flawed records, header first when any
    /// flawed record exists
    pub error_transactions: Vec<String>,

    /// Summary counters
    pub summary: ProcessSummary,
}

impl ProcessOutput {
    /// Whether any record was flagged during the run
    pub fn has_errors(&self) -> bool {
        self.summary.records_errored > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fragments: &[&str], start_line: usize, flaw: Option<RecordFlaw>) -> LogicalRecord {
        LogicalRecord {
            fragments: fragments.iter().map(|s| s.to_string()).collect(),
            start_line,
            column_count: 3,
            flaw,
        }
    }

    #[test]
    fn test_logical_record_joins_with_single_space() {
        let rec = record(&["\"a\"|^|\"b", "c\"|^|\"d\""], 4, None);
        assert_eq!(rec.text(), "\"a\"|^|\"b c\"|^|\"d\"");
        assert_eq!(rec.fragment_count(), 2);
        assert_eq!(rec.end_line(), 5);
        assert!(rec.was_repaired());
    }

    #[test]
    fn test_single_line_record_is_not_repaired() {
        let rec = record(&["\"a\"|^|\"b\"|^|\"c\""], 2, None);
        assert!(rec.is_clean());
        assert!(!rec.was_repaired());
        assert_eq!(rec.end_line(), 2);
    }

    #[test]
    fn test_flawed_record_never_counts_as_repaired() {
        let rec = record(
            &["\"a\"|^|\"b", "c"],
            7,
            Some(RecordFlaw::UnterminatedQualifier),
        );
        assert!(!rec.is_clean());
        assert!(!rec.was_repaired());
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(
            RecordFlaw::FragmentCeilingExceeded.reason_code(),
            "FragmentCeilingExceeded"
        );
        let mismatch = RecordFlaw::ColumnCountMismatch {
            expected: 46,
            found: 44,
        };
        assert_eq!(mismatch.reason_code(), "ColumnCountMismatch");
        assert_eq!(mismatch.to_string(), "expected 46 columns, found 44");
    }
}
