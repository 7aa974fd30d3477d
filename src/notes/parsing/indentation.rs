//! Indentation tracking and tree assembly
//!
//!     Notes are attached to their parents by indentation alone. Every level is exactly
//!     four spaces, and a line may go at most one level deeper than the line that opened
//!     its parent: a note cannot skip a level it never passed through.
//!
//!     While a document is being read, notes live in a [`NoteArena`] and refer to each
//!     other by [`NodeId`]. The [`IndentTracker`] holds the ids of the currently open
//!     ancestors, one per level, as an explicit stack. Depth is bounded by memory only.
//!     Once the input is exhausted the arena hands out owned [`Note`] trees.
//!
//! Algorithm
//!
//!     1. Count the leading spaces of the line; they must be a multiple of 4
//!     2. level = spaces / 4; the level may not exceed the number of open ancestors
//!     3. Pop the ancestor stack down to `level` entries
//!     4. The top of the stack (if any) is the parent of the new note
//!     5. Push the new note so deeper lines can find it

use super::error::ParseErrorKind;
use crate::notes::ast::Note;
use crate::notes::lexing::INDENT_WIDTH;

/// Handle to a note held in a [`NoteArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
struct ArenaNode {
    note: Note,
    children: Vec<NodeId>,
}

/// Owns notes while a document is being assembled.
#[derive(Debug, Default)]
pub struct NoteArena {
    nodes: Vec<ArenaNode>,
}

impl NoteArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a note (its `children` are ignored) and attach it under `parent`, if any.
    pub fn insert(&mut self, mut note: Note, parent: Option<NodeId>) -> NodeId {
        note.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(ArenaNode {
            note,
            children: Vec::new(),
        });
        if let Some(NodeId(parent)) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Turn the arena into owned trees.
    ///
    /// Children are always inserted after their parent, so building from the highest id
    /// down guarantees every child is finished before its parent needs it.
    pub fn into_trees(self) -> FinishedNotes {
        let mut built: Vec<Option<Note>> = Vec::with_capacity(self.nodes.len());
        built.resize_with(self.nodes.len(), || None);

        for (index, node) in self.nodes.into_iter().enumerate().rev() {
            let mut note = node.note;
            note.children = node
                .children
                .iter()
                .filter_map(|NodeId(child)| built[*child].take())
                .collect();
            built[index] = Some(note);
        }

        FinishedNotes { built }
    }
}

/// Notes taken out of an arena, claimed by root id.
#[derive(Debug)]
pub struct FinishedNotes {
    built: Vec<Option<Note>>,
}

impl FinishedNotes {
    /// Claim the tree rooted at `id`. Each root can be claimed once.
    pub fn take(&mut self, NodeId(id): NodeId) -> Option<Note> {
        self.built.get_mut(id).and_then(Option::take)
    }

    pub fn take_all(&mut self, ids: &[NodeId]) -> Vec<Note> {
        ids.iter().filter_map(|id| self.take(*id)).collect()
    }
}

/// Split a line into its indentation level and the text after the leading spaces.
pub fn measure_indent(line: &str) -> Result<(usize, &str), ParseErrorKind> {
    let rest = line.trim_start_matches(' ');
    let spaces = line.len() - rest.len();
    if spaces % INDENT_WIDTH != 0 {
        return Err(ParseErrorKind::Indentation { spaces });
    }
    Ok((spaces / INDENT_WIDTH, rest))
}

/// The stack of currently open ancestors.
#[derive(Debug, Default)]
pub struct IndentTracker {
    stack: Vec<NodeId>,
}

impl IndentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open ancestors, which is also the deepest level the next line may use.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget every open ancestor (context switch or blank line in contextual mode).
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Close ancestors down to `level` and return the parent for a note at that level.
    pub fn resolve_parent(&mut self, level: usize) -> Result<Option<NodeId>, ParseErrorKind> {
        if level > self.stack.len() {
            return Err(ParseErrorKind::OverIndented {
                level,
                max: self.stack.len(),
            });
        }
        self.stack.truncate(level);
        Ok(self.stack.last().copied())
    }

    /// Open `id` as the ancestor for the next level down.
    pub fn push(&mut self, id: NodeId) {
        self.stack.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_indent() {
        assert_eq!(measure_indent("n  x"), Ok((0, "n  x")));
        assert_eq!(measure_indent("        n  x"), Ok((2, "n  x")));
        assert_eq!(
            measure_indent("   n  x"),
            Err(ParseErrorKind::Indentation { spaces: 3 })
        );
        assert_eq!(
            measure_indent("      n  x"),
            Err(ParseErrorKind::Indentation { spaces: 6 })
        );
    }

    #[test]
    fn test_cannot_skip_a_level() {
        let mut tracker = IndentTracker::new();
        assert_eq!(
            tracker.resolve_parent(1),
            Err(ParseErrorKind::OverIndented { level: 1, max: 0 })
        );
    }

    #[test]
    fn test_tracker_builds_tree_in_arena() {
        let mut arena = NoteArena::new();
        let mut tracker = IndentTracker::new();

        // root
        //     a
        //         b
        //     c
        let mut place = |level: usize, name: &str| {
            let parent = tracker.resolve_parent(level).unwrap();
            let id = arena.insert(Note::new("n", name), parent);
            tracker.push(id);
            id
        };
        let root = place(0, "root");
        place(1, "a");
        place(2, "b");
        place(1, "c");

        let mut finished = arena.into_trees();
        let tree = finished.take(root).unwrap();

        assert_eq!(tree.description, "root");
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].description, "a");
        assert_eq!(tree.children[0].children[0].description, "b");
        assert_eq!(tree.children[1].description, "c");
        assert!(finished.take(root).is_none());
    }

    #[test]
    fn test_deep_trees_do_not_recurse() {
        let mut arena = NoteArena::new();
        let mut tracker = IndentTracker::new();
        let mut root = None;
        for level in 0..10_000 {
            let parent = tracker.resolve_parent(level).unwrap();
            let id = arena.insert(Note::new("n", level.to_string()), parent);
            root.get_or_insert(id);
            tracker.push(id);
        }
        assert_eq!(tracker.depth(), 10_000);

        let mut finished = arena.into_trees();
        let tree = finished.take(root.unwrap()).unwrap();
        let deepest = tree.iter_with_depth().map(|(_, d)| d).max().unwrap();
        assert_eq!(deepest, 9_999);
        drop(tree);
    }
}
