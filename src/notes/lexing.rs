//! Line-level lexing
//!
//! Everything that happens to a raw line before the note grammar sees it: reading it
//! from the input collaborator, expanding tabs, and splitting off a key prefix.

pub mod key_prefix;
pub mod normalize;
pub mod source;

pub use key_prefix::{extract_key_prefix, KeyPrefix};
pub use normalize::{is_blank, normalize_tabs, INDENT_WIDTH};
pub use source::{reader_lines, str_lines, SourceLines};
