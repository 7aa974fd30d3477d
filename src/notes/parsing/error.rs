//! Errors that can occur while parsing a notes document
//!
//! Parsing is fail-fast: the first violation ends the parse with a single
//! [`ParseError`] naming the 1-based line it was found on. Failures of the input
//! collaborator are never folded into this taxonomy; they travel separately through
//! [`ReadError::Source`] or [`NotesError::Io`].

use std::convert::Infallible;
use std::io;
use thiserror::Error;

/// A grammar violation, pinned to an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("notes must be indented by multiples of 4 spaces (found {spaces})")]
    Indentation { spaces: usize },

    #[error("note is too deeply indented (level {level}, deepest allowed is {max})")]
    OverIndented { level: usize, max: usize },

    #[error("apparent note type is too long: {token}")]
    TypeTokenTooLong { token: String },

    #[error("non-terminated note qualifier")]
    UnterminatedQualifier,

    #[error("double space after note type is missing")]
    MissingSeparator,

    /// `opened` is the line the note's description started on.
    #[error("unmatched verbatim block terminator (in the note starting on line {opened})")]
    UnmatchedTerminator { opened: usize },

    #[error("nested verbatim blocks are not allowed (outer block opened on line {opened})")]
    NestedVerbatim { opened: usize },

    #[error("non-terminated verbatim block")]
    UnterminatedVerbatim,

    #[error("contexts are not allowed in the flat format")]
    ContextNotAllowedInFlatMode,

    #[error("non-terminated note context")]
    UnterminatedContext,
}

impl ParseErrorKind {
    pub fn at(self, line: usize) -> ParseError {
        ParseError::new(line, self)
    }
}

/// Result of parsing over a generic line source with error type `E`.
#[derive(Debug, Error)]
pub enum ReadError<E> {
    /// The line source failed; the error is passed through as-is.
    #[error("failed to read input: {0}")]
    Source(E),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ReadError<Infallible> {
    /// Unwrap the grammar error of a parse whose source cannot fail.
    pub fn into_parse_error(self) -> ParseError {
        match self {
            ReadError::Parse(err) => err,
            ReadError::Source(never) => match never {},
        }
    }
}

/// Errors from parsing a reader.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl NotesError {
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            NotesError::Parse(err) => Some(err),
            NotesError::Io(_) => None,
        }
    }
}

impl From<ReadError<io::Error>> for NotesError {
    fn from(err: ReadError<io::Error>) -> Self {
        match err {
            ReadError::Source(err) => NotesError::Io(err),
            ReadError::Parse(err) => NotesError::Parse(err),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_line_number() {
        let err = ParseErrorKind::Indentation { spaces: 3 }.at(7);
        assert_eq!(
            err.to_string(),
            "line 7: notes must be indented by multiples of 4 spaces (found 3)"
        );
    }

    #[test]
    fn test_type_token_message_names_token() {
        let err = ParseErrorKind::TypeTokenTooLong {
            token: "abcdef".to_string(),
        }
        .at(1);
        assert_eq!(err.to_string(), "line 1: apparent note type is too long: abcdef");
    }

    #[test]
    fn test_io_errors_stay_io_errors() {
        let err: NotesError =
            ReadError::Source(io::Error::new(io::ErrorKind::UnexpectedEof, "eof")).into();
        match err {
            NotesError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::UnexpectedEof),
            NotesError::Parse(_) => panic!("expected an I/O error"),
        }
    }
}
