//! Tests for record reconstruction components
//!
//! Shared fixtures live here; the per-component tests are in their own
//! modules.


use crate::app::services::record_rebuilder::RecordRebuilder;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_FRAGMENT_CEILING, DEFAULT_QUALIFIER};

pub const DELIM: &str = DEFAULT_DELIMITER;
pub const QUAL: char = DEFAULT_QUALIFIER;

/// Rebuilder over the default dialect
pub fn default_rebuilder(schema_width: usize) -> RecordRebuilder {
    RecordRebuilder::new(schema_width, DELIM, QUAL, DEFAULT_FRAGMENT_CEILING)
}

/// Owned line vector from string literals
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
