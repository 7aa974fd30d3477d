//! Context flattening
//!
//!     Every context becomes a note whose type is `.` and whose description is the
//!     context title. Its children are the flattened child contexts followed by the
//!     context's own notes, in order. Notes are moved, never copied.

use crate::notes::ast::{Context, Note};

/// Type token given to the note that stands in for a context.
pub const CONTEXT_LINK_VALUE: &str = ".";

/// A context whose child contexts are still being flattened.
struct Frame {
    note: Note,
    notes: Vec<Note>,
    pending: std::vec::IntoIter<Context>,
}

impl Frame {
    fn open(context: Context) -> Self {
        Self {
            note: Note::new(CONTEXT_LINK_VALUE, context.title),
            notes: context.notes,
            pending: context.child_contexts.into_iter(),
        }
    }

    fn close(mut self) -> Note {
        self.note.children.append(&mut self.notes);
        self.note
    }
}

pub fn flatten(contexts: Vec<Context>) -> Vec<Note> {
    let mut roots = Vec::with_capacity(contexts.len());
    let mut stack: Vec<Frame> = Vec::new();

    for context in contexts {
        stack.push(Frame::open(context));

        // Explicit stack so hand-built context nesting cannot overflow the call stack
        while let Some(frame) = stack.last_mut() {
            match frame.pending.next() {
                Some(child) => stack.push(Frame::open(child)),
                None => {
                    let Some(frame) = stack.pop() else { break };
                    let note = frame.close();
                    match stack.last_mut() {
                        Some(parent) => parent.note.children.push(note),
                        None => roots.push(note),
                    }
                }
            }
        }
    }

    tracing::debug!(roots = roots.len(), "flattened contexts");
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_titles_and_order() {
        let contexts = vec![
            Context::untitled().with_note(Note::new("n", "loose")),
            Context::new("work")
                .with_note(Note::new("n", "a"))
                .with_note(Note::new("n", "b")),
        ];
        let notes = flatten(contexts);

        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].link_value, ".");
        assert_eq!(notes[0].description, "");
        assert_eq!(notes[0].children[0].description, "loose");
        assert_eq!(notes[1].description, "work");
        let children: Vec<_> = notes[1].children.iter().map(|n| n.description.as_str()).collect();
        assert_eq!(children, vec!["a", "b"]);
    }

    #[test]
    fn test_child_contexts_come_before_notes() {
        let contexts = vec![Context::new("outer")
            .with_note(Note::new("n", "own"))
            .with_child_context(Context::new("inner").with_note(Note::new("n", "nested")))];
        let notes = flatten(contexts);

        let outer = &notes[0];
        assert_eq!(outer.children.len(), 2);
        assert_eq!(outer.children[0].link_value, ".");
        assert_eq!(outer.children[0].description, "inner");
        assert_eq!(outer.children[0].children[0].description, "nested");
        assert_eq!(outer.children[1].description, "own");
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten(Vec::new()).is_empty());
        let notes = flatten(vec![Context::new("empty")]);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].children.is_empty());
    }

    #[test]
    fn test_flatten_preserves_note_fields() {
        let note = Note::new("n", "x").with_qualifier("q").with_keys("00001", "00002");
        let notes = flatten(vec![Context::new("c").with_note(note.clone())]);
        assert_eq!(notes[0].children[0], note);
    }
}
