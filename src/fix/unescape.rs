//! Literal `\"` to `"` substitution.

use std::borrow::Cow;

pub const ESCAPED_QUOTE: &str = "\\\"";
pub const QUOTE: &str = "\"";

/// Replace every non-overlapping `\"` with `"`, scanning left to right.
///
/// Only the two-character pattern is matched. Backslashes in front of it are
/// left alone, so `\\"` becomes `\"` rather than `"`. The input is borrowed
/// back unchanged when it holds no escaped quotes.
pub fn unescape_quotes(content: &str) -> Cow<'_, str> {
    if content.contains(ESCAPED_QUOTE) {
        Cow::Owned(content.replace(ESCAPED_QUOTE, QUOTE))
    } else {
        Cow::Borrowed(content)
    }
}

/// Number of escaped quotes [`unescape_quotes`] will replace.
pub fn count_escaped_quotes(content: &str) -> usize {
    content.matches(ESCAPED_QUOTE).count()
}
