//! Curated sample documents
//!
//! The files under `samples/` are embedded at compile time and addressed by kind and
//! number, e.g. `Samples::flat(1)` for `samples/flat-01-basic.notes`.

use crate::notes::ast::{Context, Document, Note, ParseMode};
use crate::notes::parsing::{parse_document, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    Flat,
    Contextual,
}

impl SampleKind {
    pub fn mode(self) -> ParseMode {
        match self {
            SampleKind::Flat => ParseMode::Flat,
            SampleKind::Contextual => ParseMode::Contextual,
        }
    }
}

struct SampleFile {
    kind: SampleKind,
    number: usize,
    name: &'static str,
    source: &'static str,
}

const SAMPLES: &[SampleFile] = &[
    SampleFile {
        kind: SampleKind::Flat,
        number: 1,
        name: "flat-01-basic.notes",
        source: include_str!("../../../samples/flat-01-basic.notes"),
    },
    SampleFile {
        kind: SampleKind::Flat,
        number: 2,
        name: "flat-02-keys.notes",
        source: include_str!("../../../samples/flat-02-keys.notes"),
    },
    SampleFile {
        kind: SampleKind::Flat,
        number: 3,
        name: "flat-03-qualifiers.notes",
        source: include_str!("../../../samples/flat-03-qualifiers.notes"),
    },
    SampleFile {
        kind: SampleKind::Flat,
        number: 4,
        name: "flat-04-verbatim.notes",
        source: include_str!("../../../samples/flat-04-verbatim.notes"),
    },
    SampleFile {
        kind: SampleKind::Contextual,
        number: 1,
        name: "contextual-01-basic.notes",
        source: include_str!("../../../samples/contextual-01-basic.notes"),
    },
    SampleFile {
        kind: SampleKind::Contextual,
        number: 2,
        name: "contextual-02-mixed.notes",
        source: include_str!("../../../samples/contextual-02-mixed.notes"),
    },
];

/// Entry point for loading samples
pub struct Samples;

impl Samples {
    pub fn flat(number: usize) -> SampleLoader {
        Self::get(SampleKind::Flat, number)
    }

    pub fn contextual(number: usize) -> SampleLoader {
        Self::get(SampleKind::Contextual, number)
    }

    /// Look up a sample; panics if there is no such sample.
    pub fn get(kind: SampleKind, number: usize) -> SampleLoader {
        let file = SAMPLES
            .iter()
            .find(|file| file.kind == kind && file.number == number)
            .unwrap_or_else(|| panic!("No {:?} sample #{}", kind, number));
        SampleLoader { file }
    }

    /// Every sample, in declaration order.
    pub fn all() -> Vec<SampleLoader> {
        SAMPLES.iter().map(|file| SampleLoader { file }).collect()
    }
}

/// Fluent handle on one sample
pub struct SampleLoader {
    file: &'static SampleFile,
}

impl SampleLoader {
    pub fn name(&self) -> &'static str {
        self.file.name
    }

    pub fn kind(&self) -> SampleKind {
        self.file.kind
    }

    /// Get the raw source string
    pub fn source(&self) -> &'static str {
        self.file.source
    }

    /// Parse in the sample's own mode
    pub fn try_parse(&self) -> Result<Document, ParseError> {
        parse_document(self.file.source, self.file.kind.mode())
    }

    pub fn parse(&self) -> Document {
        self.try_parse()
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", self.file.name, e))
    }

    /// Parse in flat mode, whatever the sample's kind
    pub fn parse_flat(&self) -> Vec<Note> {
        match parse_document(self.file.source, ParseMode::Flat) {
            Ok(Document::Flat(notes)) => notes,
            Ok(other) => panic!(
                "{}: expected a flat document, got {:?}",
                self.file.name,
                other.mode()
            ),
            Err(e) => panic!("Failed to parse {} as flat: {}", self.file.name, e),
        }
    }

    pub fn parse_contextual(&self) -> Vec<Context> {
        match parse_document(self.file.source, ParseMode::Contextual) {
            Ok(Document::Contextual(contexts)) => contexts,
            Ok(other) => panic!(
                "{}: expected a contextual document, got {:?}",
                self.file.name,
                other.mode()
            ),
            Err(e) => panic!("Failed to parse {} as contextual: {}", self.file.name, e),
        }
    }
}
