//! Logical record reconstruction from shifted physical lines
//!
//! This module rebuilds logical records from a sequence of physical lines in
//! which qualified fields may contain embedded newlines, splitting one record
//! across several lines ("data shifting").
//!
//! ## Architecture
//!
//! - [`column_scan`] - qualifier-aware column counting over a single text
//! - [`quote_repair`] - doubled-quote-mark disambiguation (inch measurements)
//! - [`rebuilder`] - the per-record state machine with bounded lookahead merge
//!
//! Column counts are always taken over the inch-mark-repaired view of the
//! text; the accumulated record text itself stays raw so error transactions
//! preserve the original bytes.

pub mod column_scan;
pub mod quote_repair;
pub mod rebuilder;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_scan::{ColumnScan, count_columns, scan_columns};
pub use quote_repair::repair_inch_marks;
pub use rebuilder::{RebuildResult, RecordRebuilder};
