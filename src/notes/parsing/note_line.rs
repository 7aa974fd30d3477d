//! Note line grammar
//!
//!     Once the key prefix and the indentation are gone, a note line reads:
//!
//!         <type>[ [<qualifier>]][  <description>]
//!
//!     - type: everything up to the first space, at most five characters
//!     - qualifier: optional, introduced by a single space and `[`, closed by the next `]`
//!     - separator: at least two spaces after the type (or qualifier); required
//!       whenever anything follows, so `n ` and `n [q] ` are rejected
//!     - description: the rest of the line, trimmed; it may open a verbatim block that
//!       continues on later lines (see [`super::verbatim`])

use super::error::ParseErrorKind;
use crate::notes::ast::MAX_LINK_VALUE_LEN;

const SEPARATOR: &str = "  ";
const QUALIFIER_OPEN: &str = " [";
const QUALIFIER_CLOSE: char = ']';

/// The pieces of one note line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLine<'a> {
    pub link_value: &'a str,
    pub qualifier: Option<&'a str>,
    /// Description text as written; verbatim markers are still in place.
    pub description: &'a str,
}

/// Split a note line (prefix and indentation already removed) into its parts.
pub fn parse_note_line(line: &str) -> Result<NoteLine<'_>, ParseErrorKind> {
    let token_end = line.find(' ').unwrap_or(line.len());
    let link_value = &line[..token_end];
    if link_value.chars().count() > MAX_LINK_VALUE_LEN {
        return Err(ParseErrorKind::TypeTokenTooLong {
            token: link_value.to_string(),
        });
    }

    let mut rest = &line[token_end..];

    let mut qualifier = None;
    if let Some(bracketed) = rest.strip_prefix(QUALIFIER_OPEN) {
        let close = bracketed
            .find(QUALIFIER_CLOSE)
            .ok_or(ParseErrorKind::UnterminatedQualifier)?;
        qualifier = Some(bracketed[..close].trim());
        rest = &bracketed[close + QUALIFIER_CLOSE.len_utf8()..];
    }

    if rest.is_empty() {
        return Ok(NoteLine {
            link_value,
            qualifier,
            description: "",
        });
    }

    // A gap of more than two spaces is tolerated.
    if !rest.starts_with(SEPARATOR) {
        return Err(ParseErrorKind::MissingSeparator);
    }

    Ok(NoteLine {
        link_value,
        qualifier,
        description: rest.trim(),
    })
}
