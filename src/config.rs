//! Processing options and dialect detection.
//!
//! Provides the configuration structure consumed by the core processor,
//! validation rules for delimiter/qualifier combinations, and automatic
//! detection of the file dialect from the header line.

use crate::constants::{
    CANDIDATE_DELIMITERS, CANDIDATE_QUALIFIERS, DEFAULT_DELIMITER, DEFAULT_FRAGMENT_CEILING,
    DEFAULT_QUALIFIER,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options controlling a single repair invocation
///
/// `delimiter` and `qualifier` may be left unset, in which case they are
/// detected from the header line at processing time and fall back to the
/// defaults (`|^|` and `"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Column delimiter; may be multi-character (e.g. `|^|`)
    pub delimiter: Option<String>,

    /// Text qualifier wrapping field values
    pub qualifier: Option<char>,

    /// Maximum physical lines merged into one logical record
    pub fragment_ceiling: usize,

    /// Whether error-flagged records are still written to the corrected
    /// stream (preserves row alignment for downstream consumers)
    pub emit_flagged: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            qualifier: None,
            fragment_ceiling: DEFAULT_FRAGMENT_CEILING,
            emit_flagged: true,
        }
    }
}

impl ProcessOptions {
    /// Validate option combinations before processing
    pub fn validate(&self) -> Result<()> {
        if self.fragment_ceiling == 0 {
            return Err(Error::configuration(
                "fragment ceiling must be at least 1".to_string(),
            ));
        }

        if let Some(delimiter) = &self.delimiter {
            if delimiter.is_empty() {
                return Err(Error::configuration("delimiter must not be empty"));
            }
            if let Some(qualifier) = self.qualifier {
                if delimiter.contains(qualifier) {
                    return Err(Error::configuration(format!(
                        "qualifier '{}' must not appear in delimiter '{}'",
                        qualifier, delimiter
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve the effective dialect for a given header line
    ///
    /// Explicit options win; otherwise the header is probed for known
    /// candidates and the defaults are used as a last resort.
    pub fn resolve_dialect(&self, header: &str) -> (String, char) {
        let (detected_delimiter, detected_qualifier) = detect_dialect(header);

        let delimiter = self
            .delimiter
            .clone()
            .or(detected_delimiter)
            .unwrap_or_else(|| DEFAULT_DELIMITER.to_string());
        let qualifier = self
            .qualifier
            .or(detected_qualifier)
            .unwrap_or(DEFAULT_QUALIFIER);

        debug!(
            "Resolved dialect: delimiter='{}' qualifier='{}'",
            delimiter, qualifier
        );
        (delimiter, qualifier)
    }
}

/// Probe a header line for a known delimiter and text qualifier
///
/// Returns the first candidate of each kind that appears in the line. `|^|`
/// is checked before `|` so the compound form wins when both match.
pub fn detect_dialect(header: &str) -> (Option<String>, Option<char>) {
    let delimiter = CANDIDATE_DELIMITERS
        .iter()
        .find(|candidate| header.contains(*candidate))
        .map(|candidate| candidate.to_string());

    let qualifier = CANDIDATE_QUALIFIERS
        .iter()
        .copied()
        .find(|candidate| header.contains(*candidate));

    (delimiter, qualifier)
}
