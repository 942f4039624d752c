//! Line normalization and key/value splitting.

use super::patterns::{BULLET_PREFIX, WHITESPACE_RUN};

/// Delimiters in priority order. The dash needs surrounding spaces so
/// hyphenated words and negative numbers stay intact.
const DELIMITERS: [&str; 3] = [":", "=", " - "];

/// Normalize a raw OCR line for matching.
///
/// Trims, strips one leading run of bullet/numbering characters, collapses
/// whitespace and lower-cases. An empty return means "skip this line".
pub fn normalize_line(line: &str) -> String {
    let trimmed = line.trim();
    let stripped = BULLET_PREFIX.replace(trimmed, "");
    let collapsed = WHITESPACE_RUN.replace_all(stripped.trim(), " ");
    collapsed.to_lowercase()
}

/// Split a normalized line into `(key, value)`.
///
/// Uses the first delimiter (by priority) that appears after position 0 and
/// splits at its first occurrence. Lines without a delimiter come back as
/// `(line, "")`.
pub fn split_key_value(line: &str) -> (&str, &str) {
    for delimiter in DELIMITERS {
        if let Some(pos) = line.find(delimiter) {
            if pos > 0 {
                let key = line[..pos].trim();
                let value = line[pos + delimiter.len()..].trim();
                return (key, value);
            }
        }
    }

    (line.trim(), "")
}
