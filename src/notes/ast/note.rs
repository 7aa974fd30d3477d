//! Note element
//!
//!     A note is one line of the outline: a short type token, an optional bracketed
//!     qualifier, and a description, plus the notes indented beneath it.
//!
//!     Syntax (one line, key prefix and indentation optional):
//!
//!         <link-key>:<target-key>: <indent><type> [<qualifier>]  <description>
//!
//!     Notes own their children. The tree depth of a parsed note always equals the
//!     indentation level of the line it came from. Dropping a note releases its subtree
//!     without recursion, so trees of any depth can be freed. The derived `Clone`,
//!     `PartialEq`, `Debug` and serde impls still walk the tree recursively.

use serde::{Deserialize, Serialize};

/// The type token rendered for notes whose `link_value` is empty.
pub const EMPTY_LINK_VALUE: &str = "_";

/// The longest type token the grammar accepts.
pub const MAX_LINK_VALUE_LEN: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// The description text. Verbatim blocks may leave embedded newlines here.
    pub description: String,
    /// The type token, classifying the note's relation to its parent.
    pub link_value: String,
    pub qualifier: Option<String>,
    pub target_key: Option<String>,
    pub link_key: Option<String>,
    pub children: Vec<Note>,
}

impl Note {
    pub fn new(link_value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            link_value: link_value.into(),
            qualifier: None,
            target_key: None,
            link_key: None,
            children: Vec::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn with_keys(mut self, link_key: impl Into<String>, target_key: impl Into<String>) -> Self {
        self.link_key = Some(link_key.into());
        self.target_key = Some(target_key.into());
        self
    }

    pub fn with_child(mut self, child: Note) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Note>) -> Self {
        self.children.extend(children);
        self
    }

    /// The type token as it is written out: `_` stands in for an empty one.
    pub fn display_link_value(&self) -> &str {
        if self.link_value.is_empty() {
            EMPTY_LINK_VALUE
        } else {
            &self.link_value
        }
    }

    pub fn has_keys(&self) -> bool {
        self.link_key.is_some() || self.target_key.is_some()
    }

    /// Number of notes in this subtree, this one included.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(note) = pending.pop() {
            count += 1;
            pending.extend(note.children.iter());
        }
        count
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first, pre-order walk yielding each note with its depth (this note is 0).
    pub fn iter_with_depth(&self) -> impl Iterator<Item = (&Note, usize)> {
        let mut pending = vec![(self, 0)];
        std::iter::from_fn(move || {
            let (note, depth) = pending.pop()?;
            pending.extend(note.children.iter().rev().map(|c| (c, depth + 1)));
            Some((note, depth))
        })
    }
}

impl Drop for Note {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut note) = pending.pop() {
            pending.append(&mut note.children);
        }
    }
}
