//! Tree-shaped projection of a note for interchange layers
//!
//! The projection pairs the two ends of the relation a note line describes: the
//! *link* (its key and type token) and the *target* (its key and description).
//! Children are omitted entirely when a note has none, matching what consumers of
//! the JSON form expect.

use super::note::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub key: Option<String>,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteProjection {
    pub link: Endpoint,
    pub target: Endpoint,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NoteProjection>,
}

fn project_one(note: &Note, children: Vec<NoteProjection>) -> NoteProjection {
    NoteProjection {
        link: Endpoint {
            key: note.link_key.clone(),
            value: note.link_value.clone(),
        },
        target: Endpoint {
            key: note.target_key.clone(),
            value: note.description.clone(),
        },
        children,
    }
}

/// Project a note and its subtree.
pub fn project_note(note: &Note) -> NoteProjection {
    // Pre-order listing with parent slots, then assembled bottom-up
    let mut order: Vec<(&Note, usize)> = Vec::new();
    let mut pending: Vec<(&Note, usize)> = note.children.iter().rev().map(|c| (c, 0)).collect();
    while let Some((current, parent)) = pending.pop() {
        order.push((current, parent));
        let slot = order.len();
        pending.extend(current.children.iter().rev().map(|c| (c, slot)));
    }

    // Slot 0 belongs to the root, slot i + 1 to `order[i]`
    let mut children: Vec<Vec<NoteProjection>> = Vec::new();
    children.resize_with(order.len() + 1, Vec::new);
    for (index, (current, parent)) in order.iter().enumerate().rev() {
        let mut own = std::mem::take(&mut children[index + 1]);
        own.reverse();
        children[*parent].push(project_one(current, own));
    }

    let mut roots = std::mem::take(&mut children[0]);
    roots.reverse();
    project_one(note, roots)
}

pub fn project_notes(notes: &[Note]) -> Vec<NoteProjection> {
    notes.iter().map(project_note).collect()
}

impl Drop for NoteProjection {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut projection) = pending.pop() {
            pending.append(&mut projection.children);
        }
    }
}
