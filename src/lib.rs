//! # tinker-notes
//!
//! A parser and serializer for the tinker outline notes notation.
//!
//! ```rust,ignore
//! use tinker_notes::notes::{parse_contextual, serialize_contexts};
//!
//! let contexts = parse_contextual("[work]\nn  finish the report\n")?;
//! assert_eq!(serialize_contexts(&contexts), "[work]\nn  finish the report\n\n");
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](notes::testing).
//! Parser tests should use the verified samples and the fluent note assertions.

pub mod notes;
