//! Line sources
//!
//! The parser pulls input one line at a time from whatever the caller hands it: an
//! in-memory string, a reader, or any iterator of fallible lines. [`SourceLines`] keeps
//! the 1-based number of the line most recently handed out, which is what every parse
//! error reports.

use std::convert::Infallible;
use std::io::{self, BufRead};

/// A cursor over input lines that tracks the current line number.
pub struct SourceLines<I> {
    lines: I,
    line_number: usize,
}

impl<I, E> SourceLines<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_number: 0,
        }
    }

    /// Pull the next line. Errors from the underlying source are returned untouched.
    pub fn next_line(&mut self) -> Option<Result<String, E>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }

    /// Number of the line last returned by [`next_line`](Self::next_line); 0 before the first.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Lines of an in-memory string, as an infallible source.
pub fn str_lines(source: &str) -> impl Iterator<Item = Result<String, Infallible>> + '_ {
    source.lines().map(|line| Ok(line.to_string()))
}

/// Lines of a buffered reader. I/O failures surface as the iterator's errors.
pub fn reader_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_numbers_are_one_based() {
        let mut lines = SourceLines::new(str_lines("a\nb"));
        assert_eq!(lines.line_number(), 0);
        assert_eq!(lines.next_line().unwrap().unwrap(), "a");
        assert_eq!(lines.line_number(), 1);
        assert_eq!(lines.next_line().unwrap().unwrap(), "b");
        assert_eq!(lines.line_number(), 2);
        assert!(lines.next_line().is_none());
        assert_eq!(lines.line_number(), 2);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let mut lines = SourceLines::new(str_lines("a\r\nb\r\n"));
        assert_eq!(lines.next_line().unwrap().unwrap(), "a");
        assert_eq!(lines.next_line().unwrap().unwrap(), "b");
    }

    #[test]
    fn test_reader_errors_pass_through() {
        let failing = vec![
            Ok("n  x".to_string()),
            Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
        ];
        let mut lines = SourceLines::new(failing.into_iter());
        assert!(lines.next_line().unwrap().is_ok());
        let err = lines.next_line().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
        assert_eq!(lines.line_number(), 2);
    }
}
