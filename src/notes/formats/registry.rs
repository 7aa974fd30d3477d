//! Output format registry
//!
//!     Every output of the `tinker` tool goes through a [`FormatRegistry`]: the
//!     outline notation itself, the JSON and YAML projections, and the treeviz
//!     drawing. Formats are looked up by name, so a caller can swap one out by
//!     registering another formatter under the same name.
//!
//!     [`FormatRegistry::from_config`] builds the registry the tool actually uses,
//!     with the treeviz formatter carrying the options of the loaded configuration.

use super::treeviz::{TreevizFormatter, TreevizOptions};
use crate::notes::ast::Document;
use crate::notes::config::TinkerConfig;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The JSON or YAML encoder failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(format!("JSON: {err}"))
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::SerializationError(format!("YAML: {err}"))
    }
}

/// Renders a parsed notes document as text.
pub trait Formatter: Send + Sync {
    /// Name the format is registered under, e.g. `outline`.
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// One-line summary shown by `tinker --list-formats`.
    fn description(&self) -> &str {
        ""
    }
}

pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry with no formats at all.
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Add `formatter`, replacing any format of the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        tracing::debug!(format, notes = doc.note_count(), "serializing document");
        formatter.serialize(doc)
    }

    /// Registered format names, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// The four built-in formats, treeviz drawn with `treeviz` options.
    pub fn with_treeviz_options(treeviz: TreevizOptions) -> Self {
        let mut registry = Self::new();
        registry.register(super::OutlineFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(TreevizFormatter::with_options(treeviz));
        registry
    }

    pub fn with_defaults() -> Self {
        Self::with_treeviz_options(TreevizOptions::default())
    }

    /// The built-in formats, configured from a loaded [`TinkerConfig`].
    pub fn from_config(config: &TinkerConfig) -> Self {
        Self::with_treeviz_options(TreevizOptions::from(&config.treeviz))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
