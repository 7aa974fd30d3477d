//! Snapshot - a normalized intermediate representation of a notes document
//!
//! The snapshot captures the tree structure with node types, labels, attributes and
//! children, so that presentation formats (treeviz and friends) only deal with layout
//! and never re-implement document traversal.
//!
//! All formatters that need a generic tree should consume the output of
//! [`snapshot_from_document`] rather than walking `Document` themselves.

use super::{Context, Document, Note};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of a node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    /// The type of node ("Document", "Context" or "Note")
    pub node_type: String,

    /// The primary label of the node
    pub label: String,

    /// Additional attributes specific to the node type
    pub attributes: BTreeMap<String, String>,

    /// Child nodes in the tree
    pub children: Vec<NoteSnapshot>,
}

impl NoteSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: NoteSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<NoteSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

// ============================================================================
// Snapshot Building Functions
// ============================================================================

/// Build a snapshot of a note and all of its descendants
pub fn snapshot_from_note(note: &Note) -> NoteSnapshot {
    // Only the first line of a multi-line (verbatim) description makes it into the label
    let first_line = note.description.lines().next().unwrap_or("");
    let mut snapshot = NoteSnapshot::new(
        "Note",
        format!("{} {}", note.display_link_value(), first_line),
    );

    if let Some(qualifier) = &note.qualifier {
        snapshot = snapshot.with_attribute("qualifier", qualifier.clone());
    }
    if let Some(key) = &note.link_key {
        snapshot = snapshot.with_attribute("link_key", key.clone());
    }
    if let Some(key) = &note.target_key {
        snapshot = snapshot.with_attribute("target_key", key.clone());
    }
    if note.description.contains('\n') {
        snapshot = snapshot.with_attribute("verbatim", "true");
    }

    snapshot.with_children(note.children.iter().map(snapshot_from_note).collect())
}

pub fn snapshot_from_context(context: &Context) -> NoteSnapshot {
    let label = if context.is_untitled() {
        "(untitled)".to_string()
    } else {
        context.title.clone()
    };

    NoteSnapshot::new("Context", label)
        .with_children(
            context
                .child_contexts
                .iter()
                .map(snapshot_from_context)
                .collect(),
        )
        .with_children(context.notes.iter().map(snapshot_from_note).collect())
}

/// Build a snapshot for the document root
pub fn snapshot_from_document(doc: &Document) -> NoteSnapshot {
    match doc {
        Document::Flat(notes) => NoteSnapshot::new(
            "Document",
            format!("Document (flat, {} notes)", notes.len()),
        )
        .with_children(notes.iter().map(snapshot_from_note).collect()),
        Document::Contextual(contexts) => NoteSnapshot::new(
            "Document",
            format!("Document (contextual, {} contexts)", contexts.len()),
        )
        .with_children(contexts.iter().map(snapshot_from_context).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_snapshot_attributes() {
        let note = Note::new("n", "first\nsecond")
            .with_qualifier("q")
            .with_keys("00001", "00002");
        let snapshot = snapshot_from_note(&note);

        assert_eq!(snapshot.node_type, "Note");
        assert_eq!(snapshot.label, "n first");
        assert_eq!(snapshot.attributes["qualifier"], "q");
        assert_eq!(snapshot.attributes["link_key"], "00001");
        assert_eq!(snapshot.attributes["target_key"], "00002");
        assert_eq!(snapshot.attributes["verbatim"], "true");
    }

    #[test]
    fn test_document_snapshot_contexts() {
        let doc = Document::Contextual(vec![
            Context::untitled().with_note(Note::new("n", "x")),
            Context::new("work"),
        ]);
        let snapshot = snapshot_from_document(&doc);

        assert_eq!(snapshot.children.len(), 2);
        assert_eq!(snapshot.children[0].label, "(untitled)");
        assert_eq!(snapshot.children[0].children[0].label, "n x");
        assert_eq!(snapshot.children[1].label, "work");
    }
}
