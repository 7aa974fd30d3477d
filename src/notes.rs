//! Main module for tinker notes functionality
//!
//!     The notation is an indentation-based outline. Every line is a note with a short
//!     type token and a description; deeper indentation makes a note the child of the
//!     note above it:
//!
//!         [projects]
//!         00001:00002: n  tinker notes
//!             n [maybe]  a qualified child
//!             _  code lives in {{{verbatim
//!         blocks}}} that may span lines
//!
//!     Documents are parsed in one of two modes (see [`ParseMode`]): flat documents
//!     are plain note trees, contextual documents group root notes under `[title]`
//!     headers.
//!
//! Layout
//!
//!     - [`lexing`]: line sources, tab expansion, key prefixes
//!     - [`parsing`]: the note grammar and document assembly
//!     - [`ast`]: notes, contexts, documents and their projections
//!     - [`formats`]: outline, json, yaml and treeviz output
//!     - [`transforms`]: context flattening
//!     - [`config`]: layered configuration for the CLI
//!     - [`testing`]: sample documents and fluent assertions

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod transforms;

pub use ast::{project_note, project_notes, Context, Document, Note, NoteProjection, ParseMode};
pub use formats::{
    serialize_contexts, serialize_notes, write_contexts, write_notes, FormatError, FormatRegistry,
};
pub use parsing::{
    parse_contextual, parse_document, parse_flat, parse_lines, read_contextual, read_document,
    read_flat, NotesError, ParseError, ParseErrorKind, ReadError,
};
pub use transforms::flatten;
