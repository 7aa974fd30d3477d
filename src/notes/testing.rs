//! Testing utilities for notes documents
//!
//!     Two rules keep the parser tests honest:
//!
//!         1. Prefer the curated sample files in `samples/` (via [`Samples`]) over
//!            notation typed inline into a test. Hand-written snippets drift from the
//!            notation in subtle ways (a three-space indent, a single-space separator)
//!            and then the test checks the wrong thing.
//!         2. Check parsed trees with the fluent assertions ([`assert_notes`],
//!            [`assert_contexts`]) instead of poking at fields, so that a failure
//!            names the path of the note that was wrong.
//!
//!     Inline notation is still fine for error cases, where the point is a malformed
//!     line.
//!
//!     ```rust,ignore
//!     use tinker_notes::notes::testing::{assert_notes, Samples};
//!
//!     let notes = Samples::flat(2).parse_flat();
//!     assert_notes(&notes)
//!         .count(2)
//!         .note(0, |n| n.link_value("n").link_key("00001").child_count(2));
//!     ```

pub mod assertions;
pub mod samples;

pub use assertions::{
    assert_contexts, assert_notes, ContextAssertion, ContextsAssertion, NoteAssertion,
    NotesAssertion,
};
pub use samples::{SampleKind, SampleLoader, Samples};
