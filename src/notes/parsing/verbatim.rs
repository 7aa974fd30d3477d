//! Verbatim block scanning
//!
//!     A description may contain verbatim regions delimited by `{{{` and `}}}`. Inside a
//!     region line boundaries no longer end the description: the scanner keeps pulling
//!     raw input lines until the region closes, and joins them with newlines. Content
//!     is taken literally; the markers themselves are dropped.
//!
//!         n  see this {{{first line
//!         second line}}} and that
//!
//!     yields the description `"see this first line\nsecond line and that"`.
//!
//!     The scanner always acts on whichever marker comes first in the remaining text,
//!     so a block opened and closed on the same line is fine. Errors:
//!
//!     - a close marker while no block is open: unmatched terminator (on its own line,
//!       naming the line the note started on)
//!     - an open marker while a block is open: nested block (on its own line)
//!     - input running out inside a block: non-terminated block (on the opening line)

use super::error::{ParseErrorKind, ReadError};
use crate::notes::lexing::SourceLines;

pub const VERBATIM_OPEN: &str = "{{{";
pub const VERBATIM_CLOSE: &str = "}}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open,
    Close,
}

/// Find the earliest marker in `text`, with its byte offset.
fn next_marker(text: &str) -> Option<(usize, Marker)> {
    let open = text.find(VERBATIM_OPEN).map(|i| (i, Marker::Open));
    let close = text.find(VERBATIM_CLOSE).map(|i| (i, Marker::Close));
    match (open, close) {
        (Some(o), Some(c)) => Some(if o.0 <= c.0 { o } else { c }),
        (o, c) => o.or(c),
    }
}

/// Scans a description, pulling continuation lines while a block is open.
#[derive(Debug, Default)]
pub struct VerbatimScanner {
    /// Line on which the description started.
    first_line: Option<usize>,
    /// Line on which the currently open block started.
    open_since: Option<usize>,
    text: String,
}

impl VerbatimScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self) -> bool {
        self.open_since.is_some()
    }

    /// Consume one physical line of description text found on `line_number`.
    pub fn feed(&mut self, segment: &str, line_number: usize) -> Result<(), ParseErrorKind> {
        let first_line = *self.first_line.get_or_insert(line_number);
        let mut rest = segment;
        while let Some((offset, marker)) = next_marker(rest) {
            match (self.open_since, marker) {
                (None, Marker::Open) => {
                    self.text.push_str(&rest[..offset]);
                    self.open_since = Some(line_number);
                    tracing::trace!(line = line_number, "verbatim block opened");
                }
                (Some(_), Marker::Close) => {
                    self.text.push_str(&rest[..offset]);
                    self.open_since = None;
                    tracing::trace!(line = line_number, "verbatim block closed");
                }
                (None, Marker::Close) => {
                    return Err(ParseErrorKind::UnmatchedTerminator { opened: first_line })
                }
                (Some(opened), Marker::Open) => {
                    return Err(ParseErrorKind::NestedVerbatim { opened })
                }
            }
            rest = &rest[offset + VERBATIM_OPEN.len()..];
        }
        self.text.push_str(rest);
        Ok(())
    }

    /// Scan a description starting with `first`, which sits on the cursor's current line.
    pub fn scan<I, E>(
        mut self,
        first: &str,
        lines: &mut SourceLines<I>,
    ) -> Result<String, ReadError<E>>
    where
        I: Iterator<Item = Result<String, E>>,
    {
        self.feed(first, lines.line_number())
            .map_err(|kind| kind.at(lines.line_number()))?;

        while let Some(opened) = self.open_since {
            self.text.push('\n');
            let line = match lines.next_line() {
                Some(line) => line.map_err(ReadError::Source)?,
                None => return Err(ParseErrorKind::UnterminatedVerbatim.at(opened).into()),
            };
            self.feed(&line, lines.line_number())
                .map_err(|kind| kind.at(lines.line_number()))?;
        }

        Ok(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::lexing::str_lines;
    use std::convert::Infallible;

    fn scan_from(source: &str) -> Result<String, ReadError<Infallible>> {
        let mut lines = SourceLines::new(str_lines(source));
        let first = lines.next_line().unwrap().unwrap();
        VerbatimScanner::new().scan(&first, &mut lines)
    }

    fn parse_error(result: Result<String, ReadError<Infallible>>) -> (usize, ParseErrorKind) {
        match result {
            Err(ReadError::Parse(err)) => (err.line, err.kind),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(scan_from("just text").unwrap(), "just text");
    }

    #[test]
    fn test_same_line_block() {
        assert_eq!(scan_from("a {{{b}}} c").unwrap(), "a b c");
        assert_eq!(scan_from("{{{}}}").unwrap(), "");
        assert_eq!(scan_from("{{{x}}}{{{y}}}").unwrap(), "xy");
    }

    #[test]
    fn test_feed_tracks_open_block() {
        let mut scanner = VerbatimScanner::new();
        scanner.feed("a {{{b", 1).unwrap();
        assert!(scanner.is_inside());
        scanner.feed("c}}} d", 2).unwrap();
        assert!(!scanner.is_inside());
        assert_eq!(scanner.text, "a bc d");
        assert_eq!(
            scanner.feed("e }}}", 3),
            Err(ParseErrorKind::UnmatchedTerminator { opened: 1 })
        );
    }

    #[test]
    fn test_multi_line_block() {
        let text = scan_from("see {{{first\n  second\n}}} done").unwrap();
        assert_eq!(text, "see first\n  second\n done");
    }

    #[test]
    fn test_continuation_lines_are_raw() {
        let text = scan_from("{{{\n\tindented: not a key:\n}}}").unwrap();
        assert_eq!(text, "\n\tindented: not a key:\n");
    }

    #[test]
    fn test_unmatched_terminator() {
        assert_eq!(
            parse_error(scan_from("oops }}}")),
            (1, ParseErrorKind::UnmatchedTerminator { opened: 1 })
        );
        assert_eq!(
            parse_error(scan_from("{{{a\nb}}} c }}}")),
            (2, ParseErrorKind::UnmatchedTerminator { opened: 1 })
        );
    }

    #[test]
    fn test_nested_block_reports_both_lines() {
        assert_eq!(
            parse_error(scan_from("{{{a\nb\nc {{{")),
            (3, ParseErrorKind::NestedVerbatim { opened: 1 })
        );
    }

    #[test]
    fn test_unterminated_block_reports_opening_line() {
        assert_eq!(
            parse_error(scan_from("x {{{a\nb\nc")),
            (1, ParseErrorKind::UnterminatedVerbatim)
        );
    }

    #[test]
    fn test_source_errors_pass_through() {
        let input = vec![Ok("{{{".to_string()), Err("broken pipe")];
        let mut lines = SourceLines::new(input.into_iter());
        let first = lines.next_line().unwrap().unwrap();
        match VerbatimScanner::new().scan(&first, &mut lines) {
            Err(ReadError::Source(err)) => assert_eq!(err, "broken pipe"),
            other => panic!("expected a source error, got {:?}", other),
        }
    }
}
