//! Treeviz formatter for notes documents
//!
//! Treeviz is a one-line-per-node drawing of the document tree, handy for eyeballing
//! how the parser nested things. Each line is:
//!
//!     <prefix><connector> <icon> <label>
//!
//! where the label is truncated to a configurable number of characters.
//!
//! Example:
//!
//!     ⧉ Document (contextual, 2 contexts)
//!     ├─ § (untitled)
//!     │ └─ • n loose
//!     └─ § work
//!       ├─ • n task
//!       │ └─ • _ subtask
//!       └─ 𝒱 code {{{
//!
//! Icons
//!     Document: ⧉
//!     Context: §
//!     Note: •
//!     Note with a verbatim (multi-line) description: 𝒱

use super::registry::{FormatError, Formatter};
use crate::notes::ast::{snapshot_from_document, Document, NoteSnapshot};

pub const DEFAULT_MAX_LABEL: usize = 30;

/// Rendering options for treeviz output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    pub max_label: usize,
    /// Append `link_key:target_key` to notes that carry keys.
    pub show_keys: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            max_label: DEFAULT_MAX_LABEL,
            show_keys: false,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(snapshot: &NoteSnapshot) -> &'static str {
    match snapshot.node_type.as_str() {
        "Document" => "⧉",
        "Context" => "§",
        "Note" if snapshot.attributes.contains_key("verbatim") => "𝒱",
        "Note" => "•",
        _ => "○",
    }
}

fn label(snapshot: &NoteSnapshot, options: &TreevizOptions) -> String {
    let mut label = truncate(&snapshot.label, options.max_label);
    if options.show_keys {
        let link_key = snapshot.attributes.get("link_key");
        let target_key = snapshot.attributes.get("target_key");
        if link_key.is_some() || target_key.is_some() {
            label.push_str(&format!(
                " ({}:{})",
                link_key.map(String::as_str).unwrap_or(""),
                target_key.map(String::as_str).unwrap_or("")
            ));
        }
    }
    label
}

fn format_snapshot(
    output: &mut String,
    snapshot: &NoteSnapshot,
    prefix: &str,
    is_last: bool,
    options: &TreevizOptions,
) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(snapshot),
        label(snapshot, options)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(output, child, &child_prefix, i + 1 == child_count, options);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_options(doc, &TreevizOptions::default())
}

pub fn to_treeviz_str_with_options(doc: &Document, options: &TreevizOptions) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = format!("{} {}\n", get_icon(&snapshot), snapshot.label);

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(&mut output, child, "", i + 1 == child_count, options);
    }
    output
}

/// Formatter implementation for treeviz format
#[derive(Debug, Clone, Default)]
pub struct TreevizFormatter {
    pub options: TreevizOptions,
}

impl TreevizFormatter {
    pub fn with_options(options: TreevizOptions) -> Self {
        Self { options }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str_with_options(doc, &self.options))
    }

    fn description(&self) -> &str {
        "Visual tree representation with Unicode icons"
    }
}
