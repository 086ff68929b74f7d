//! Backslash escaping for tokens embedded in an lftp command line.

use std::borrow::Cow;

/// Characters that lftp's command parser treats specially (besides whitespace).
const SPECIAL: &[char] = &['"', '\'', '$', '`', '[', ']', '\\'];

fn needs_escape(c: char) -> bool {
    c.is_whitespace() || SPECIAL.contains(&c)
}

/// Prefix every special character in `value` with a backslash.
///
/// Each occurrence is escaped independently in a single pass, so an existing
/// backslash becomes `\\` rather than protecting the character after it.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 4);
    for c in value.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape `value` only when `enabled`; otherwise borrow it unchanged.
pub fn escape_if(enabled: bool, value: &str) -> Cow<'_, str> {
    if enabled && value.chars().any(needs_escape) {
        Cow::Owned(escape(value))
    } else {
        Cow::Borrowed(value)
    }
}
