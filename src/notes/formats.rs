//! Output formats for notes documents
//!
//! This module contains the serializers a parsed [`Document`] can be written with:
//! - outline: the notation itself, in canonical form
//! - json / yaml: the `{link, target, children}` projection of every root note
//! - treeviz: a one-line-per-node drawing of the tree
//!
//! Each format is also exposed as a [`Formatter`] so that callers can pick one by name
//! through [`FormatRegistry`].

pub mod outline;
pub mod projection;
pub mod registry;
pub mod treeviz;

pub use outline::{pad_key, serialize_contexts, serialize_notes, write_contexts, write_notes};
pub use projection::{to_json_string, to_yaml_string, JsonFormatter, YamlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_options, TreevizFormatter, TreevizOptions};

use crate::notes::ast::Document;

/// Serialize a document of either mode back into outline notation.
pub fn serialize_document(doc: &Document) -> String {
    match doc {
        Document::Flat(notes) => serialize_notes(notes),
        Document::Contextual(contexts) => serialize_contexts(contexts),
    }
}

impl Document {
    pub fn to_outline(&self) -> String {
        serialize_document(self)
    }
}

pub struct OutlineFormatter;

impl Formatter for OutlineFormatter {
    fn name(&self) -> &str {
        "outline"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "Canonical notes notation"
    }
}
