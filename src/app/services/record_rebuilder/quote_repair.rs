//! Doubled-quote-mark disambiguation
//!
//! A doubled qualifier at the end of a qualified field is ambiguous: it may
//! be an inch measurement (`"CAP-GOWN PKG ULTRA NAVY 60""`) or a genuine
//! embedded quotation (`"... Complio "Splash pages""`). This module applies
//! the measurement rewrite; everything else is left for the column scanner
//! and field normalizer to treat as embedded quotes.
//!
//! The trigger is a heuristic keyed on position, not a grammar: the doubled
//! mark must sit at a field boundary (before the delimiter or at end of line)
//! inside a properly qualified non-empty field, and be immediately preceded by
//! an ASCII digit. Ambiguous inputs surface on the error-transactions stream
//! for manual review.

use crate::constants::INCH_UNIT_TEXT;
use std::borrow::Cow;

/// Rewrite digit-adjacent doubled qualifier marks at field boundaries as the
/// literal word `inches`
///
/// `60""|^|` becomes `60 inches"|^|`: the first mark of the pair is replaced
/// by the unit text and the second survives as the field's closing qualifier.
/// Non-digit-preceded doubled marks are untouched.
pub fn repair_inch_marks<'a>(line: &'a str, delimiter: &str, qualifier: char) -> Cow<'a, str> {
    let qualifier_len = qualifier.len_utf8();
    let mut doubled = String::with_capacity(qualifier_len * 2);
    doubled.push(qualifier);
    doubled.push(qualifier);

    if !line.contains(&doubled) {
        return Cow::Borrowed(line);
    }

    let mut result = line.to_string();
    let mut pos = 0;

    while let Some(rel) = result[pos..].find(&doubled) {
        let mark = pos + rel;
        let after = mark + doubled.len();

        // Only a pair sitting at a field boundary is a candidate
        let at_boundary = after == result.len() || result[after..].starts_with(delimiter);
        if !at_boundary {
            pos = mark + qualifier_len;
            continue;
        }

        // The field must open with a qualifier right after the previous
        // delimiter (or at start of line) and have content before the pair
        let field_open = result[..mark]
            .rfind(delimiter)
            .map(|d| d + delimiter.len())
            .unwrap_or(0);
        if !result[field_open..].starts_with(qualifier) {
            pos = mark + doubled.len();
            continue;
        }

        let field_start = field_open + qualifier_len;
        let preceded_by_digit = mark > field_start
            && result[..mark]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_ascii_digit());

        if preceded_by_digit {
            // Replace the first mark of the pair; the second closes the field
            result.replace_range(mark..mark + qualifier_len, INCH_UNIT_TEXT);
            pos = mark + INCH_UNIT_TEXT.len();
        } else {
            pos = mark + qualifier_len;
        }
    }

    Cow::Owned(result)
}
