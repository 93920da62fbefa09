//! Qualified-field content normalization
//!
//! Once a record is structurally complete its qualified fields still carry
//! the residue of the repair: tabs, carriage returns, and the space runs
//! introduced by joining fragments. This service re-tokenizes the record and
//! rewrites each qualified field with collapsed whitespace, while bare fields
//! and delimiters pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

use super::record_rebuilder::quote_repair::repair_inch_marks;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(" {2,}").expect("static space-run pattern"));

/// Whether a qualifier mark at `mark_end` (the byte offset just past the
/// mark) sits at a field boundary: followed, after optional whitespace, by
/// the delimiter or end of text
fn closes_field(text: &str, mark_end: usize, delimiter: &str) -> bool {
    let mut next = mark_end;
    while let Some(c) = text[next..].chars().next() {
        if !c.is_whitespace() {
            break;
        }
        next += c.len_utf8();
    }
    next >= text.len() || text[next..].starts_with(delimiter)
}

/// Collapse whitespace inside one field's content
fn clean_field_content(content: &str) -> String {
    let collapsed = SPACE_RUNS.replace_all(content, " ");
    collapsed.trim().to_string()
}

/// Normalize a reconstructed record's qualified fields
///
/// Inch-mark repair is applied first, then the record is walked with the same
/// closing-quote lookahead as the column scanner. Inside a qualified field:
/// newlines and tabs become single spaces, space runs collapse to one space,
/// leading/trailing whitespace is trimmed, an interior doubled qualifier
/// collapses to a single literal mark, and single embedded qualifier marks
/// are kept as literal text. Whitespace between a closing qualifier and the
/// delimiter is dropped.
pub fn normalize_record(text: &str, delimiter: &str, qualifier: char) -> String {
    let fixed = repair_inch_marks(text, delimiter, qualifier);
    let fixed = fixed.as_ref();
    let qualifier_len = qualifier.len_utf8();

    let mut output = String::with_capacity(fixed.len());
    let mut field_content = String::new();
    let mut in_qualifier = false;
    let mut pos = 0;

    while pos < fixed.len() {
        let rest = &fixed[pos..];

        if rest.starts_with(qualifier) {
            if !in_qualifier {
                in_qualifier = true;
                field_content.clear();
                output.push(qualifier);
                pos += qualifier_len;
                continue;
            }

            // Same boundary lookahead as the column scanner
            let mut next = pos + qualifier_len;
            while let Some(c) = fixed[next..].chars().next() {
                if !c.is_whitespace() {
                    break;
                }
                next += c.len_utf8();
            }

            if next >= fixed.len() || fixed[next..].starts_with(delimiter) {
                output.push_str(&clean_field_content(&field_content));
                output.push(qualifier);
                in_qualifier = false;
                pos = next;
                if fixed[pos..].starts_with(delimiter) {
                    output.push_str(delimiter);
                    pos += delimiter.len();
                }
            } else {
                field_content.push(qualifier);
                pos += qualifier_len;
                // Interior doubled qualifier is an escaped quote: collapse the
                // pair to one mark, unless the second copy closes the field
                if fixed[pos..].starts_with(qualifier)
                    && !closes_field(fixed, pos + qualifier_len, delimiter)
                {
                    pos += qualifier_len;
                }
            }
        } else if !in_qualifier && rest.starts_with(delimiter) {
            output.push_str(delimiter);
            pos += delimiter.len();
        } else {
            match rest.chars().next() {
                Some(c) => {
                    if in_qualifier {
                        match c {
                            '\n' | '\r' | '\t' => field_content.push(' '),
                            _ => field_content.push(c),
                        }
                    } else {
                        output.push(c);
                    }
                    pos += c.len_utf8();
                }
                None => break,
            }
        }
    }

    // Unterminated qualifier at end of record: keep the partial text rather
    // than dropping it; the record is already flagged upstream
    if in_qualifier {
        output.push_str(&clean_field_content(&field_content));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELIM: &str = "|^|";
    const QUAL: char = '"';

    #[test]
    fn test_clean_record_passes_through() {
        let line = "\"SU-1001832\"|^|\"Net 30\"|^|\"Paid\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), line);
    }

    #[test]
    fn test_space_runs_collapse() {
        let line = "\"Multiple   spaces\"|^|\"x\"";
        assert_eq!(
            normalize_record(line, DELIM, QUAL),
            "\"Multiple spaces\"|^|\"x\""
        );
    }

    #[test]
    fn test_tabs_become_single_spaces() {
        let line = "\"a\tb\"|^|\"c\t\td\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), "\"a b\"|^|\"c d\"");
    }

    #[test]
    fn test_join_residue_is_trimmed() {
        let line = "\" Software  Engineer \"|^|\"x\"";
        assert_eq!(
            normalize_record(line, DELIM, QUAL),
            "\"Software Engineer\"|^|\"x\""
        );
    }

    #[test]
    fn test_embedded_quotes_survive() {
        let line = "\"ADB will apply SSL Certificates for WGU Complio \"Splash pages\"\"|^|\"Paid\"";
        let normalized = normalize_record(line, DELIM, QUAL);
        assert!(normalized.contains("\"Splash pages\""));
        assert!(normalized.ends_with("|^|\"Paid\""));
    }

    #[test]
    fn test_trailing_inch_mark_becomes_unit() {
        let line = "\"2\"|^|\"CAP-GOWN PKG ULTRA NAVY 57\"\"|^|\"Paid\"";
        assert_eq!(
            normalize_record(line, DELIM, QUAL),
            "\"2\"|^|\"CAP-GOWN PKG ULTRA NAVY 57 inches\"|^|\"Paid\""
        );
    }

    #[test]
    fn test_mid_field_inch_mark_is_preserved() {
        let line = "\"SU-1001832\"|^|\"Net 30\"|^|\"12\" monitor is Paid\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), line);
    }

    #[test]
    fn test_interior_doubled_quote_collapses_to_one() {
        let line = "\"He said \"\"stop\"\" twice\"|^|\"x\"";
        assert_eq!(
            normalize_record(line, DELIM, QUAL),
            "\"He said \"stop\" twice\"|^|\"x\""
        );
    }

    #[test]
    fn test_bare_fields_pass_through() {
        let line = "\"John Doe\"|^|30|^|\"Software Engineer\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), line);
    }

    #[test]
    fn test_whitespace_before_delimiter_is_dropped() {
        let line = "\"a\" |^|\"b\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), "\"a\"|^|\"b\"");
    }

    #[test]
    fn test_unterminated_field_keeps_partial_text() {
        let line = "\"a\"|^|\"partial   text";
        assert_eq!(normalize_record(line, DELIM, QUAL), "\"a\"|^|\"partial text");
    }

    #[test]
    fn test_empty_fields_unchanged() {
        let line = "\"\"|^|\"\"|^|\"x\"";
        assert_eq!(normalize_record(line, DELIM, QUAL), line);
    }
}
