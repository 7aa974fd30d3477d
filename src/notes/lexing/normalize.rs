//! Tab normalization
//!
//! Tabs count as four spaces each, wherever they appear on a line. Every structural
//! line goes through here before it is classified; verbatim continuation lines do not.

use std::borrow::Cow;

pub const TAB_REPLACEMENT: &str = "    ";

/// Width of one indentation level, in spaces.
pub const INDENT_WIDTH: usize = TAB_REPLACEMENT.len();

/// Expand every tab in `line` to four spaces.
///
/// Lines without tabs are borrowed as-is.
pub fn normalize_tabs(line: &str) -> Cow<'_, str> {
    if line.contains('\t') {
        Cow::Owned(line.replace('\t', TAB_REPLACEMENT))
    } else {
        Cow::Borrowed(line)
    }
}

/// True for lines with nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
