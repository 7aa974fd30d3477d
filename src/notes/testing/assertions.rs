//! Fluent assertions for parsed notes
//!
//! Every assertion carries the path of the node it is looking at (`notes[0].children[2]`,
//! `contexts[1]`) so that failure messages point at the offending note.

use crate::notes::ast::{Context, Note};

// ============================================================================
// Entry Points
// ============================================================================

/// Create an assertion builder for a list of root notes
pub fn assert_notes(notes: &[Note]) -> NotesAssertion<'_> {
    NotesAssertion {
        notes,
        context: "notes".to_string(),
    }
}

/// Create an assertion builder for the contexts of a contextual document
pub fn assert_contexts(contexts: &[Context]) -> ContextsAssertion<'_> {
    ContextsAssertion { contexts }
}

fn summarize(notes: &[Note]) -> String {
    notes
        .iter()
        .map(|note| format!("{} {:?}", note.display_link_value(), note.description))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Note Lists
// ============================================================================

pub struct NotesAssertion<'a> {
    notes: &'a [Note],
    context: String,
}

impl<'a> NotesAssertion<'a> {
    /// Assert the number of notes in the list
    pub fn count(self, expected: usize) -> Self {
        let actual = self.notes.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} notes, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.notes)
        );
        self
    }

    /// Assert on a specific note by index
    pub fn note<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NoteAssertion<'a>),
    {
        assert!(
            index < self.notes.len(),
            "{}: Note index {} out of bounds ({} notes)",
            self.context,
            index,
            self.notes.len()
        );
        assertion(NoteAssertion {
            note: &self.notes[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the descriptions of the notes in the list, in order
    pub fn descriptions(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.notes.iter().map(|n| n.description.as_str()).collect();
        assert_eq!(
            actual, expected,
            "{}: Unexpected descriptions",
            self.context
        );
        self
    }
}

// ============================================================================
// Single Notes
// ============================================================================

pub struct NoteAssertion<'a> {
    note: &'a Note,
    context: String,
}

impl<'a> NoteAssertion<'a> {
    pub fn link_value(self, expected: &str) -> Self {
        assert_eq!(
            self.note.link_value, expected,
            "{}: Expected type '{}', but got '{}'",
            self.context, expected, self.note.link_value
        );
        self
    }

    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.note.description, expected,
            "{}: Expected description {:?}, but got {:?}",
            self.context, expected, self.note.description
        );
        self
    }

    pub fn description_contains(self, substring: &str) -> Self {
        assert!(
            self.note.description.contains(substring),
            "{}: Expected description to contain {:?}, but got {:?}",
            self.context,
            substring,
            self.note.description
        );
        self
    }

    pub fn qualifier(self, expected: &str) -> Self {
        assert_eq!(
            self.note.qualifier.as_deref(),
            Some(expected),
            "{}: Unexpected qualifier",
            self.context
        );
        self
    }

    pub fn no_qualifier(self) -> Self {
        assert_eq!(
            self.note.qualifier, None,
            "{}: Expected no qualifier",
            self.context
        );
        self
    }

    pub fn link_key(self, expected: &str) -> Self {
        assert_eq!(
            self.note.link_key.as_deref(),
            Some(expected),
            "{}: Unexpected link key",
            self.context
        );
        self
    }

    pub fn target_key(self, expected: &str) -> Self {
        assert_eq!(
            self.note.target_key.as_deref(),
            Some(expected),
            "{}: Unexpected target key",
            self.context
        );
        self
    }

    pub fn no_keys(self) -> Self {
        assert!(
            !self.note.has_keys(),
            "{}: Expected no keys, but got {:?}:{:?}",
            self.context,
            self.note.link_key,
            self.note.target_key
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.note.children.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.note.children)
        );
        self
    }

    pub fn is_leaf(self) -> Self {
        self.child_count(0)
    }

    /// Assert on a specific child by index
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NoteAssertion<'a>),
    {
        assert!(
            index < self.note.children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            self.note.children.len()
        );
        assertion(NoteAssertion {
            note: &self.note.children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Continue with list assertions over the children
    pub fn children(self) -> NotesAssertion<'a> {
        NotesAssertion {
            notes: &self.note.children,
            context: format!("{}.children", self.context),
        }
    }
}

// ============================================================================
// Contexts
// ============================================================================

pub struct ContextsAssertion<'a> {
    contexts: &'a [Context],
}

impl<'a> ContextsAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        let titles: Vec<&str> = self.contexts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            self.contexts.len(),
            expected,
            "Expected {} contexts, found {}: {:?}",
            expected,
            self.contexts.len(),
            titles
        );
        self
    }

    pub fn titles(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.contexts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(actual, expected, "Unexpected context titles");
        self
    }

    pub fn context<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ContextAssertion<'a>),
    {
        assert!(
            index < self.contexts.len(),
            "Context index {} out of bounds ({} contexts)",
            index,
            self.contexts.len()
        );
        assertion(ContextAssertion {
            context: &self.contexts[index],
            path: format!("contexts[{}]", index),
        });
        self
    }
}

pub struct ContextAssertion<'a> {
    context: &'a Context,
    path: String,
}

impl<'a> ContextAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.context.title, expected,
            "{}: Expected title '{}', but got '{}'",
            self.path, expected, self.context.title
        );
        self
    }

    pub fn untitled(self) -> Self {
        self.title("")
    }

    /// Continue with list assertions over the context's root notes
    pub fn notes(self) -> NotesAssertion<'a> {
        NotesAssertion {
            notes: &self.context.notes,
            context: format!("{}.notes", self.path),
        }
    }
}
