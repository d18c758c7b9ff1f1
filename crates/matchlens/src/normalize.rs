//! Title canonicalization.
//!
//! Canonical forms are used strictly for equality comparison and are only
//! ever shown as a secondary annotation next to the original text.

/// Normalize a title for comparison.
///
/// Lowercases (Unicode-aware), replaces every run of non-letter/non-digit
/// characters with a single space, and trims. The result contains only
/// lowercase letters and digits separated by single spaces.
///
/// Total and idempotent: every input has a defined output, and normalizing
/// a canonical form is a no-op.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_gap = false;

    // Lowercase before classifying: a few uppercase letters lower to a
    // letter plus a combining mark, and the mark must act as a separator.
    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_gap && !out.is_empty() {
                out.push(' ');
            }
            pending_gap = false;
            out.push(ch);
        } else {
            pending_gap = true;
        }
    }

    out
}
