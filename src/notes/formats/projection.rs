//! JSON and YAML output
//!
//! Both formats emit the list of root note projections (`{link, target, children}`).
//! Contextual documents are flattened first, so each context shows up as a `.` note
//! whose children are that context's notes.

use super::registry::{FormatError, Formatter};
use crate::notes::ast::{project_notes, Document, NoteProjection};

fn projections(doc: &Document) -> Vec<NoteProjection> {
    match doc {
        Document::Flat(notes) => project_notes(notes),
        Document::Contextual(_) => project_notes(&doc.to_flat_notes()),
    }
}

pub fn to_json_string(doc: &Document) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(&projections(doc))?)
}

pub fn to_yaml_string(doc: &Document) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(&projections(doc))?)
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json_string(doc)
    }

    fn description(&self) -> &str {
        "Note projections as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_yaml_string(doc)
    }

    fn description(&self) -> &str {
        "Note projections as YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::ast::{Context, Note};

    #[test]
    fn test_json_of_flat_document() {
        let doc = Document::Flat(vec![Note::new("n", "hello").with_keys("00001", "00042")]);
        let value: serde_json::Value =
            serde_json::from_str(&to_json_string(&doc).unwrap()).unwrap();

        assert_eq!(value[0]["link"]["key"], "00001");
        assert_eq!(value[0]["link"]["value"], "n");
        assert_eq!(value[0]["target"]["key"], "00042");
        assert_eq!(value[0]["target"]["value"], "hello");
    }

    #[test]
    fn test_json_of_contextual_document_is_flattened() {
        let doc =
            Document::Contextual(vec![Context::new("work").with_note(Note::new("n", "task"))]);
        let value: serde_json::Value =
            serde_json::from_str(&to_json_string(&doc).unwrap()).unwrap();

        assert_eq!(value[0]["link"]["value"], ".");
        assert_eq!(value[0]["target"]["value"], "work");
        assert_eq!(value[0]["children"][0]["target"]["value"], "task");
    }

    #[test]
    fn test_yaml_parses_back_to_projections() {
        let doc = Document::Flat(vec![Note::new("n", "root").with_child(Note::new("m", "child"))]);
        let yaml = to_yaml_string(&doc).unwrap();
        let parsed: Vec<NoteProjection> = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed, projections(&doc));
    }
}
