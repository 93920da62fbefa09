//! Record classification and output routing
//!
//! Routes each finished logical record to the corrected stream and, for
//! repaired or flawed records, to the error-log and error-transaction
//! streams. The error log is the repair audit trail: clean multi-fragment
//! repairs are logged alongside genuine failures. Nothing here aborts a run;
//! a malformed record degrades to a flagged emission.

use tracing::debug;

use crate::app::models::{LogicalRecord, ProcessOutput, ProcessSummary};
use crate::constants::ERROR_LOG_RULE_WIDTH;

/// Accumulates the three output streams and summary counters for one run
#[derive(Debug)]
pub struct RecordEmitter {
    emit_flagged: bool,
    corrected: Vec<String>,
    error_log: Vec<String>,
    error_transactions: Vec<String>,
    summary: ProcessSummary,
}

impl RecordEmitter {
    /// Create an emitter seeded with the header line
    ///
    /// The normalized header opens the corrected stream; the raw header opens
    /// the error-transactions stream so flagged rows stay interpretable, and
    /// is dropped again at [`finish`](Self::finish) when no row follows it.
    pub fn new(raw_header: &str, normalized_header: String, emit_flagged: bool) -> Self {
        Self {
            emit_flagged,
            corrected: vec![normalized_header],
            error_log: Vec::new(),
            error_transactions: vec![raw_header.to_string()],
            summary: ProcessSummary::default(),
        }
    }

    /// Route one logical record with its normalized text
    pub fn emit(&mut self, record: &LogicalRecord, normalized: String) {
        self.summary.records_emitted += 1;

        match &record.flaw {
            None => {
                if record.was_repaired() {
                    self.summary.records_fixed += 1;
                    self.log_repair(record);
                }
                self.corrected.push(normalized);
            }
            Some(flaw) => {
                self.summary.records_errored += 1;
                self.error_log.push(format!(
                    "Error: lines {}-{}: {}: {} ({} fragments, {} columns)",
                    record.start_line,
                    record.end_line(),
                    flaw.reason_code(),
                    flaw,
                    record.fragment_count(),
                    record.column_count
                ));
                self.log_fragments(record);
                self.error_log.push("-".repeat(ERROR_LOG_RULE_WIDTH));

                for fragment in &record.fragments {
                    self.error_transactions.push(fragment.clone());
                }

                if self.emit_flagged {
                    self.corrected.push(normalized);
                } else {
                    debug!(
                        "Suppressed flagged record at lines {}-{}",
                        record.start_line,
                        record.end_line()
                    );
                }
            }
        }
    }

    /// Audit block for a clean multi-fragment repair
    fn log_repair(&mut self, record: &LogicalRecord) {
        self.error_log.push(format!(
            "Fixed multi-line transaction at lines {}-{}:",
            record.start_line,
            record.end_line()
        ));
        self.log_fragments(record);
        self.error_log
            .push(format!("Combined into: {}", record.text()));
        self.error_log.push("-".repeat(ERROR_LOG_RULE_WIDTH));
    }

    fn log_fragments(&mut self, record: &LogicalRecord) {
        for (offset, fragment) in record.fragments.iter().enumerate() {
            self.error_log
                .push(format!("Line {}: {}", record.start_line + offset, fragment));
        }
    }

    /// Seal the streams into a [`ProcessOutput`]
    pub fn finish(mut self, total_lines: usize, blank_lines: usize) -> ProcessOutput {
        self.summary.total_lines = total_lines;
        self.summary.blank_lines = blank_lines;

        // A transactions stream holding only the header means no errors
        if self.error_transactions.len() == 1 {
            self.error_transactions.clear();
        }

        ProcessOutput {
            corrected: self.corrected,
            error_log: self.error_log,
            error_transactions: self.error_transactions,
            summary: self.summary,
        }
    }
}
