//! Document assembly
//!
//!     The assembler drives a single pass over the input. Each line is tab-normalized
//!     and then classified:
//!
//!     - blank: in contextual mode it ends the current context and closes every open
//!       ancestor; in flat mode it is ignored
//!     - context header: starts with `[` and has a later `]`; the trimmed text between
//!       them titles a new context (contextual mode only)
//!     - note line: optional key prefix, indentation, then the note grammar
//!
//!     In contextual mode a root note that arrives while no context is active opens an
//!     untitled one. Notes are held in an arena until the input is exhausted, then moved
//!     into the returned document.

use super::error::{ParseErrorKind, ReadError};
use super::indentation::{measure_indent, IndentTracker, NodeId, NoteArena};
use super::note_line::parse_note_line;
use super::verbatim::VerbatimScanner;
use crate::notes::ast::{Context, Document, Note, ParseMode};
use crate::notes::lexing::{extract_key_prefix, is_blank, normalize_tabs, SourceLines};

const CONTEXT_OPEN: char = '[';
const CONTEXT_CLOSE: char = ']';

/// A context whose notes are still in the arena.
#[derive(Debug)]
struct PendingContext {
    title: String,
    roots: Vec<NodeId>,
}

/// Single-use state for one parse pass.
#[derive(Debug)]
pub struct Assembler {
    mode: ParseMode,
    arena: NoteArena,
    tracker: IndentTracker,
    flat_roots: Vec<NodeId>,
    contexts: Vec<PendingContext>,
    /// Index into `contexts` of the context root notes currently go to.
    current: Option<usize>,
}

impl Assembler {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            arena: NoteArena::new(),
            tracker: IndentTracker::new(),
            flat_roots: Vec::new(),
            contexts: Vec::new(),
            current: None,
        }
    }

    /// Read every line of `lines` and build the document.
    pub fn run<I, E>(mut self, lines: I) -> Result<Document, ReadError<E>>
    where
        I: Iterator<Item = Result<String, E>>,
    {
        let mut lines = SourceLines::new(lines);

        while let Some(raw) = lines.next_line() {
            let raw = raw.map_err(ReadError::Source)?;
            let line = normalize_tabs(&raw);
            let line_number = lines.line_number();

            if is_blank(&line) {
                self.blank_line();
            } else if line.starts_with(CONTEXT_OPEN) {
                self.context_header(&line)
                    .map_err(|kind| kind.at(line_number))?;
            } else {
                self.note_line(&line, &mut lines)?;
            }
        }

        Ok(self.finish())
    }

    fn blank_line(&mut self) {
        // In the flat format, empty lines are simply ignored
        if self.mode == ParseMode::Contextual {
            self.current = None;
            self.tracker.reset();
        }
    }

    fn context_header(&mut self, line: &str) -> Result<(), ParseErrorKind> {
        if self.mode == ParseMode::Flat {
            return Err(ParseErrorKind::ContextNotAllowedInFlatMode);
        }
        let close = line
            .rfind(CONTEXT_CLOSE)
            .ok_or(ParseErrorKind::UnterminatedContext)?;
        let title = line[CONTEXT_OPEN.len_utf8()..close].trim().to_string();

        tracing::trace!(title = %title, "context opened");
        self.tracker.reset();
        self.contexts.push(PendingContext {
            title,
            roots: Vec::new(),
        });
        self.current = Some(self.contexts.len() - 1);
        Ok(())
    }

    fn note_line<I, E>(
        &mut self,
        line: &str,
        lines: &mut SourceLines<I>,
    ) -> Result<(), ReadError<E>>
    where
        I: Iterator<Item = Result<String, E>>,
    {
        let line_number = lines.line_number();
        let at_line = |kind: ParseErrorKind| kind.at(line_number);

        let (keys, line) = match extract_key_prefix(line) {
            Some(prefix) => (Some((prefix.link_key, prefix.target_key)), prefix.rest),
            None => (None, line),
        };

        let (level, rest) = measure_indent(line).map_err(at_line)?;
        let parent = self.tracker.resolve_parent(level).map_err(at_line)?;
        let parsed = parse_note_line(rest).map_err(at_line)?;

        let description = VerbatimScanner::new().scan(parsed.description, lines)?;

        let mut note = Note::new(parsed.link_value, description);
        note.qualifier = parsed.qualifier.map(str::to_string);
        if let Some((link_key, target_key)) = keys {
            note.link_key = Some(link_key.to_string());
            note.target_key = Some(target_key.to_string());
        }

        let id = self.arena.insert(note, parent);
        if parent.is_none() {
            self.attach_root(id);
        }
        self.tracker.push(id);
        Ok(())
    }

    fn attach_root(&mut self, id: NodeId) {
        match self.mode {
            ParseMode::Flat => self.flat_roots.push(id),
            ParseMode::Contextual => {
                let index = match self.current {
                    Some(index) => index,
                    None => {
                        self.contexts.push(PendingContext {
                            title: String::new(),
                            roots: Vec::new(),
                        });
                        self.contexts.len() - 1
                    }
                };
                self.current = Some(index);
                self.contexts[index].roots.push(id);
            }
        }
    }

    fn finish(self) -> Document {
        let note_count = self.arena.len();
        let mut finished = self.arena.into_trees();

        let document = match self.mode {
            ParseMode::Flat => Document::Flat(finished.take_all(&self.flat_roots)),
            ParseMode::Contextual => Document::Contextual(
                self.contexts
                    .into_iter()
                    .map(|pending| {
                        Context::new(pending.title).with_notes(finished.take_all(&pending.roots))
                    })
                    .collect(),
            ),
        };

        tracing::debug!(mode = %self.mode, notes = note_count, "parsed notes document");
        document
    }
}
