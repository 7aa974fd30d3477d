//! Document element
//!
//!     A document is the result of one parse pass. Its shape depends on the mode the
//!     caller asked for: a flat document is a list of root notes, a contextual document
//!     a list of contexts. The mode is not stored anywhere else; it is the variant.

use super::context::Context;
use super::note::Note;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two document modes a parse runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// No contexts; blank lines are cosmetic.
    Flat,
    /// Root notes grouped under `[title]` headers; blank lines end a context.
    #[default]
    Contextual,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Flat => write!(f, "flat"),
            ParseMode::Contextual => write!(f, "contextual"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "lowercase")]
pub enum Document {
    Flat(Vec<Note>),
    Contextual(Vec<Context>),
}

impl Document {
    pub fn mode(&self) -> ParseMode {
        match self {
            Document::Flat(_) => ParseMode::Flat,
            Document::Contextual(_) => ParseMode::Contextual,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Document::Flat(notes) => notes.is_empty(),
            Document::Contextual(contexts) => contexts.is_empty(),
        }
    }

    /// Total number of notes, at any depth.
    pub fn note_count(&self) -> usize {
        match self {
            Document::Flat(notes) => notes.iter().map(Note::len).sum(),
            Document::Contextual(contexts) => {
                let mut count = 0;
                let mut pending: Vec<&Context> = contexts.iter().collect();
                while let Some(context) = pending.pop() {
                    count += context.notes.iter().map(Note::len).sum::<usize>();
                    pending.extend(context.child_contexts.iter());
                }
                count
            }
        }
    }

    pub fn as_notes(&self) -> Option<&[Note]> {
        match self {
            Document::Flat(notes) => Some(notes),
            Document::Contextual(_) => None,
        }
    }

    pub fn as_contexts(&self) -> Option<&[Context]> {
        match self {
            Document::Flat(_) => None,
            Document::Contextual(contexts) => Some(contexts),
        }
    }

    /// Collapse into a flat document. Flat documents are returned unchanged.
    pub fn into_flat(self) -> Document {
        match self {
            Document::Flat(notes) => Document::Flat(notes),
            Document::Contextual(contexts) => {
                Document::Flat(crate::notes::transforms::flatten(contexts))
            }
        }
    }

    /// Root notes of the flattened form of this document.
    pub fn to_flat_notes(&self) -> Vec<Note> {
        match self.clone().into_flat() {
            Document::Flat(notes) => notes,
            Document::Contextual(_) => Vec::new(),
        }
    }
}

impl From<Vec<Note>> for Document {
    fn from(notes: Vec<Note>) -> Self {
        Document::Flat(notes)
    }
}

impl From<Vec<Context>> for Document {
    fn from(contexts: Vec<Context>) -> Self {
        Document::Contextual(contexts)
    }
}
