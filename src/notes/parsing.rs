//! Parsing notes documents
//!
//!     Parsing turns lines of notation into a [`Document`]. The entry points differ only
//!     in where lines come from and which mode is requested:
//!
//!     - [`parse_flat`] / [`parse_contextual`]: an in-memory string
//!     - [`read_flat`] / [`read_contextual`]: any buffered reader
//!     - [`parse_lines`]: any iterator of fallible lines
//!
//!     All of them are fail-fast and return either the whole document or the first
//!     error. Errors of the line source are passed through untouched and never
//!     reinterpreted as grammar errors.
//!
//! Layout
//!
//!     - [`indentation`]: indentation levels, ancestor stack, note arena
//!     - [`note_line`]: type token, qualifier, separator, description
//!     - [`verbatim`]: `{{{ … }}}` scanning across lines
//!     - [`assembler`]: the line loop, blank lines, context headers, modes
//!     - [`error`]: the error taxonomy

pub mod assembler;
pub mod error;
pub mod indentation;
pub mod note_line;
pub mod verbatim;

pub use assembler::Assembler;
pub use error::{NotesError, ParseError, ParseErrorKind, ParseResult, ReadError};

use crate::notes::ast::{Context, Document, Note, ParseMode};
use crate::notes::lexing::{reader_lines, str_lines};
use std::io::BufRead;

/// Parse lines from any fallible source.
pub fn parse_lines<I, E>(lines: I, mode: ParseMode) -> Result<Document, ReadError<E>>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    Assembler::new(mode).run(lines.into_iter())
}

/// Parse an in-memory document.
pub fn parse_document(source: &str, mode: ParseMode) -> ParseResult<Document> {
    parse_lines(str_lines(source), mode).map_err(ReadError::into_parse_error)
}

/// Parse a document read from `reader`.
pub fn read_document<R: BufRead>(reader: R, mode: ParseMode) -> Result<Document, NotesError> {
    Ok(parse_lines(reader_lines(reader), mode)?)
}

pub fn parse_flat(source: &str) -> ParseResult<Vec<Note>> {
    parse_document(source, ParseMode::Flat).map(into_notes)
}

pub fn parse_contextual(source: &str) -> ParseResult<Vec<Context>> {
    parse_document(source, ParseMode::Contextual).map(into_contexts)
}

pub fn read_flat<R: BufRead>(reader: R) -> Result<Vec<Note>, NotesError> {
    read_document(reader, ParseMode::Flat).map(into_notes)
}

pub fn read_contextual<R: BufRead>(reader: R) -> Result<Vec<Context>, NotesError> {
    read_document(reader, ParseMode::Contextual).map(into_contexts)
}

impl Document {
    pub fn parse(source: &str, mode: ParseMode) -> ParseResult<Document> {
        parse_document(source, mode)
    }

    pub fn read<R: BufRead>(reader: R, mode: ParseMode) -> Result<Document, NotesError> {
        read_document(reader, mode)
    }
}

// The assembler only produces the variant matching the requested mode.
fn into_notes(doc: Document) -> Vec<Note> {
    match doc {
        Document::Flat(notes) => notes,
        Document::Contextual(_) => Vec::new(),
    }
}

fn into_contexts(doc: Document) -> Vec<Context> {
    match doc {
        Document::Contextual(contexts) => contexts,
        Document::Flat(_) => Vec::new(),
    }
}
