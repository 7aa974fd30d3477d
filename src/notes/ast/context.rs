//! Context element
//!
//!     A context groups root notes under a bracketed header line (`[title]`). Contexts
//!     exist only in contextual documents. Notes that appear before any header, or
//!     after a blank line, land in an implicit context with an empty title.
//!
//!     `child_contexts` is a reserved nesting slot: the parser never fills it, but the
//!     flattener honours it so that callers building nested contexts by hand get the
//!     expected result.

use super::note::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub title: String,
    pub notes: Vec<Note>,
    pub child_contexts: Vec<Context>,
}

impl Context {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// The context synthesized when notes appear without a header.
    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    pub fn with_child_context(mut self, context: Context) -> Self {
        self.child_contexts.push(context);
        self
    }

    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }
}
