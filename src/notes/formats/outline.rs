//! Outline serializer
//!
//!     Renders documents back into the notation they were parsed from. The output is
//!     canonical: indentation is always four spaces per level, keys are zero-padded to
//!     five characters, and the type/description separator is exactly two spaces.
//!
//!     Contextual documents print each context as its `[title]` header (omitted for
//!     untitled contexts that hold notes), its notes, and a blank line that ends the
//!     context. Descriptions are written as-is: verbatim markers are not re-inserted,
//!     so descriptions with embedded newlines do not survive a round trip.

use crate::notes::ast::{Context, Note};
use std::io::{self, Write};

const INDENT: &str = "    ";
const SEPARATOR: &str = "  ";
const KEY_WIDTH: usize = 5;

/// Left-pad a key with zeros to five characters.
pub fn pad_key(key: &str) -> String {
    format!("{:0>width$}", key, width = KEY_WIDTH)
}

fn push_note_line(out: &mut String, note: &Note, depth: usize) {
    if note.has_keys() {
        if let Some(key) = &note.link_key {
            out.push_str(&pad_key(key));
        }
        out.push(':');
        if let Some(key) = &note.target_key {
            out.push_str(&pad_key(key));
        }
        out.push_str(": ");
    }

    for _ in 0..depth {
        out.push_str(INDENT);
    }

    out.push_str(note.display_link_value());
    if let Some(qualifier) = &note.qualifier {
        out.push_str(" [");
        out.push_str(qualifier);
        out.push(']');
    }
    out.push_str(SEPARATOR);
    out.push_str(&note.description);
    out.push('\n');
}

/// Append `note` and its subtree at `depth`, without recursing.
fn push_note_tree(out: &mut String, note: &Note, depth: usize) {
    let mut pending = vec![(note, depth)];
    while let Some((note, depth)) = pending.pop() {
        push_note_line(out, note, depth);
        pending.extend(note.children.iter().rev().map(|child| (child, depth + 1)));
    }
}

fn push_context(out: &mut String, context: &Context) {
    if !context.is_untitled() {
        out.push('[');
        out.push_str(&context.title);
        out.push_str("]\n");
    } else if context.notes.is_empty() {
        // An untitled context only exists in the text through its notes
        out.push_str("[]\n");
    }

    for note in &context.notes {
        push_note_tree(out, note, 0);
    }
}

pub fn serialize_notes(notes: &[Note]) -> String {
    let mut out = String::new();
    for note in notes {
        push_note_tree(&mut out, note, 0);
    }
    tracing::debug!(notes = notes.len(), bytes = out.len(), "serialized notes");
    out
}

pub fn serialize_contexts(contexts: &[Context]) -> String {
    let mut out = String::new();
    for context in contexts {
        push_context(&mut out, context);
        out.push('\n');
    }
    tracing::debug!(contexts = contexts.len(), bytes = out.len(), "serialized contexts");
    out
}

pub fn write_notes<W: Write>(notes: &[Note], mut out: W) -> io::Result<()> {
    out.write_all(serialize_notes(notes).as_bytes())?;
    out.flush()
}

pub fn write_contexts<W: Write>(contexts: &[Context], mut out: W) -> io::Result<()> {
    out.write_all(serialize_contexts(contexts).as_bytes())?;
    out.flush()
}
