//! In-memory model of a notes document
//!
//! - [`Note`]: one outline line and the notes indented beneath it
//! - [`Context`]: a titled group of root notes (contextual documents only)
//! - [`Document`]: either a flat list of notes or a list of contexts
//! - [`projection`]: the `{link, target, children}` shape handed to interchange layers
//! - [`snapshot`]: a generic tree used by presentation formats

pub mod context;
pub mod document;
pub mod note;
pub mod projection;
pub mod snapshot;

pub use context::Context;
pub use document::{Document, ParseMode};
pub use note::{Note, EMPTY_LINK_VALUE, MAX_LINK_VALUE_LEN};
pub use projection::{project_note, project_notes, Endpoint, NoteProjection};
pub use snapshot::{snapshot_from_document, NoteSnapshot};
