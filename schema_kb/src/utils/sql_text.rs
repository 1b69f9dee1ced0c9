//! Helpers for text lifted out of SQL statements

/// Turn the body of a single-quoted SQL literal into plain text.
///
/// Doubled quotes collapse to one and surrounding whitespace is dropped, so
/// `' User''s name '` becomes `User's name`.
pub fn unescape_string_literal(raw: &str) -> String {
    raw.replace("''", "'").trim().to_string()
}
