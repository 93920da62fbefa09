//! Line reconstruction state machine
//!
//! Consumes the data-line sequence and produces logical records. Each record
//! starts from one physical line; while its column count falls short of the
//! schema width (or a qualifier region is still open), subsequent lines are
//! greedily joined with a single space until the record completes, the
//! fragment ceiling is hit, or input runs out.

use tracing::{debug, warn};

use super::column_scan::{ColumnScan, scan_columns};
use super::quote_repair::repair_inch_marks;
use crate::app::models::{LogicalRecord, RecordFlaw};

/// Outcome of rebuilding a line sequence
#[derive(Debug, Clone)]
pub struct RebuildResult {
    /// Logical records in input order, flawed ones included
    pub records: Vec<LogicalRecord>,

    /// Blank lines skipped without joining any record
    pub blank_lines: usize,
}

/// Rebuilds logical records against a fixed schema width
///
/// Owns no input; each call to [`rebuild`](Self::rebuild) is an independent
/// single pass over the given lines.
#[derive(Debug, Clone)]
pub struct RecordRebuilder {
    schema_width: usize,
    delimiter: String,
    qualifier: char,
    fragment_ceiling: usize,
}

impl RecordRebuilder {
    pub fn new(
        schema_width: usize,
        delimiter: impl Into<String>,
        qualifier: char,
        fragment_ceiling: usize,
    ) -> Self {
        Self {
            schema_width,
            delimiter: delimiter.into(),
            qualifier,
            fragment_ceiling,
        }
    }

    /// Scan the inch-mark-repaired view of a text
    fn scan(&self, text: &str) -> ColumnScan {
        let repaired = repair_inch_marks(text, &self.delimiter, self.qualifier);
        scan_columns(&repaired, &self.delimiter, self.qualifier)
    }

    /// Rebuild logical records from a sequence of physical data lines
    ///
    /// `first_line_number` is the 1-based number of `lines[0]` in the source
    /// file (2 when the header was line 1). Every non-blank line is consumed
    /// by exactly one record.
    pub fn rebuild(&self, lines: &[String], first_line_number: usize) -> RebuildResult {
        let mut records = Vec::new();
        let mut blank_lines = 0;
        let mut index = 0;

        while index < lines.len() {
            let line = lines[index].trim_end_matches(['\r', '\n']);

            if line.trim().is_empty() {
                blank_lines += 1;
                index += 1;
                continue;
            }

            let record = self.rebuild_one(lines, index, line, first_line_number + index);
            index += record.fragment_count();
            records.push(record);
        }

        RebuildResult {
            records,
            blank_lines,
        }
    }

    /// Rebuild a single record starting at `lines[index]`
    fn rebuild_one(
        &self,
        lines: &[String],
        index: usize,
        first: &str,
        start_line: usize,
    ) -> LogicalRecord {
        let mut fragments = vec![first.to_string()];
        let mut combined = first.to_string();
        let mut scan = self.scan(&combined);

        if scan.is_complete(self.schema_width) {
            return LogicalRecord {
                fragments,
                start_line,
                column_count: scan.columns,
                flaw: None,
            };
        }

        // Over-shifted from the start: merging only adds columns, so flag
        // immediately rather than guess which columns to drop
        if scan.columns > self.schema_width {
            warn!(
                "Line {} has {} columns, expected {}",
                start_line, scan.columns, self.schema_width
            );
            return LogicalRecord {
                fragments,
                start_line,
                column_count: scan.columns,
                flaw: Some(RecordFlaw::ColumnCountMismatch {
                    expected: self.schema_width,
                    found: scan.columns,
                }),
            };
        }

        // ACCUMULATING: join following lines until complete or bounded out
        while fragments.len() < self.fragment_ceiling && index + fragments.len() < lines.len() {
            let next = lines[index + fragments.len()].trim_end_matches(['\r', '\n']);
            combined.push(' ');
            combined.push_str(next);
            fragments.push(next.to_string());

            scan = self.scan(&combined);
            if scan.is_complete(self.schema_width) || scan.columns > self.schema_width {
                break;
            }
        }

        let flaw = if scan.is_complete(self.schema_width) {
            debug!(
                "Rebuilt record at lines {}-{} from {} fragments",
                start_line,
                start_line + fragments.len() - 1,
                fragments.len()
            );
            None
        } else if scan.columns > self.schema_width {
            Some(RecordFlaw::ColumnCountMismatch {
                expected: self.schema_width,
                found: scan.columns,
            })
        } else if fragments.len() >= self.fragment_ceiling {
            Some(RecordFlaw::FragmentCeilingExceeded)
        } else if scan.open_qualifier {
            Some(RecordFlaw::UnterminatedQualifier)
        } else {
            Some(RecordFlaw::ColumnCountMismatch {
                expected: self.schema_width,
                found: scan.columns,
            })
        };

        if let Some(flaw) = &flaw {
            warn!(
                "Could not rebuild record starting at line {}: {}",
                start_line, flaw
            );
        }

        LogicalRecord {
            fragments,
            start_line,
            column_count: scan.columns,
            flaw,
        }
    }
}
