//! Repair pipeline orchestration
//!
//! Ties the services together for one invocation: derive the schema width
//! from the header line, rebuild logical records from the data lines,
//! normalize each record's qualified fields, and route everything through the
//! emitter. The only fatal conditions are an unreadable or empty input; every
//! per-record anomaly degrades to a flagged emission.

use std::path::Path;
use tracing::{debug, info, warn};

use crate::app::services::field_normalizer::normalize_record;
use crate::app::services::record_emitter::RecordEmitter;
use crate::app::services::record_rebuilder::{RecordRebuilder, repair_inch_marks, scan_columns};
use crate::config::ProcessOptions;
use crate::{Error, ProcessOutput, Result};

/// Single-pass, single-threaded repair processor
///
/// One instance per invocation; no state is shared between runs, so callers
/// may run independent processors in parallel over distinct inputs.
#[derive(Debug, Clone)]
pub struct ShiftProcessor {
    options: ProcessOptions,
}

impl ShiftProcessor {
    /// Create a processor with validated options
    pub fn new(options: ProcessOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Read and repair a file, with UTF-8 decoding and a Latin-1 fallback
    pub fn process_file(&self, path: &Path) -> Result<ProcessOutput> {
        info!("Processing input file: {}", path.display());

        let content = read_text_with_fallback(path)?;
        let lines: Vec<String> = content.lines().map(|line| line.to_string()).collect();

        if lines.is_empty() {
            return Err(Error::empty_input(path.display().to_string()));
        }

        self.process_lines(&lines)
    }

    /// Repair an in-memory line sequence
    ///
    /// The first line is the header and defines the schema width; it is
    /// echoed (normalized) as the first corrected line and never counted as a
    /// record.
    pub fn process_lines(&self, lines: &[String]) -> Result<ProcessOutput> {
        let header = match lines.first() {
            Some(line) => line.trim(),
            None => return Err(Error::empty_input("input lines")),
        };

        let (delimiter, qualifier) = self.options.resolve_dialect(header);
        let header_scan = scan_columns(
            &repair_inch_marks(header, &delimiter, qualifier),
            &delimiter,
            qualifier,
        );
        let schema_width = header_scan.columns;
        info!(
            "Using delimiter '{}', qualifier '{}': {} columns in header",
            delimiter, qualifier, schema_width
        );
        if header_scan.open_qualifier {
            warn!("Header line ends inside an open qualifier");
        }

        let rebuilder = RecordRebuilder::new(
            schema_width,
            delimiter.clone(),
            qualifier,
            self.options.fragment_ceiling,
        );
        let rebuilt = rebuilder.rebuild(&lines[1..], 2);
        debug!(
            "Rebuilt {} records from {} data lines ({} blank skipped)",
            rebuilt.records.len(),
            lines.len() - 1,
            rebuilt.blank_lines
        );

        let normalized_header = normalize_record(header, &delimiter, qualifier);
        let mut emitter = RecordEmitter::new(header, normalized_header, self.options.emit_flagged);

        for record in &rebuilt.records {
            let normalized = normalize_record(&record.text(), &delimiter, qualifier);
            emitter.emit(record, normalized);
        }

        let output = emitter.finish(lines.len(), rebuilt.blank_lines);
        info!("{}", output.summary.summary());
        Ok(output)
    }
}

/// Read a file as text, falling back to Latin-1 when it is not valid UTF-8
fn read_text_with_fallback(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read input file {}", path.display()), e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                "Input {} is not valid UTF-8, decoding as Latin-1",
                path.display()
            );
            Ok(err.into_bytes().iter().map(|&b| b as char).collect())
        }
    }
}
