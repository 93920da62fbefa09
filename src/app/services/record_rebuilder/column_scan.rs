//! Qualifier-aware column counting
//!
//! Counts logical columns in a single line of text while treating delimiter
//! occurrences inside an open qualifier region as literal field content.
//! Supports multi-character delimiters (e.g. `|^|`).

/// Result of scanning one text for column structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnScan {
    /// Number of logical columns: delimiters found outside qualifier regions,
    /// plus one
    pub columns: usize,

    /// True when the text ended inside an open qualifier region, marking the
    /// line as a fragment of a larger record
    pub open_qualifier: bool,
}

impl ColumnScan {
    /// Whether the scan describes a structurally complete line for the given
    /// schema width
    pub fn is_complete(&self, schema_width: usize) -> bool {
        self.columns == schema_width && !self.open_qualifier
    }
}

/// Scan a line, tracking qualifier state and counting columns
///
/// A qualifier character inside an open region closes the region only when it
/// is followed, after optional whitespace, by the delimiter or the end of the
/// text. Any other qualifier occurrence inside an open region is an embedded
/// mark and does not toggle state, so doubled qualifiers and stray inch marks
/// never split a field.
pub fn scan_columns(text: &str, delimiter: &str, qualifier: char) -> ColumnScan {
    let qualifier_len = qualifier.len_utf8();
    let mut columns = 1;
    let mut in_qualifier = false;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if rest.starts_with(qualifier) {
            if !in_qualifier {
                in_qualifier = true;
                pos += qualifier_len;
                continue;
            }

            // Potential close: look past trailing whitespace for a boundary
            let mut next = pos + qualifier_len;
            while let Some(c) = text[next..].chars().next() {
                if !c.is_whitespace() {
                    break;
                }
                next += c.len_utf8();
            }

            if next >= text.len() {
                in_qualifier = false;
                pos = next;
            } else if text[next..].starts_with(delimiter) {
                in_qualifier = false;
                columns += 1;
                pos = next + delimiter.len();
            } else {
                // Embedded qualifier, not a field boundary
                pos += qualifier_len;
            }
        } else if !in_qualifier && rest.starts_with(delimiter) {
            columns += 1;
            pos += delimiter.len();
        } else {
            match rest.chars().next() {
                Some(c) => pos += c.len_utf8(),
                None => break,
            }
        }
    }

    ColumnScan {
        columns,
        open_qualifier: in_qualifier,
    }
}

/// Count logical columns in a line
///
/// Convenience wrapper over [`scan_columns`] for callers that only need the
/// count; a trailing open qualifier is ignored here.
pub fn count_columns(text: &str, delimiter: &str, qualifier: char) -> usize {
    scan_columns(text, delimiter, qualifier).columns
}
