//! Tree-building recorder
//!
//! Bridges the recursion to the arena: `enter` opens a node under the current
//! innermost open call, `leave` finalizes it. The open-node stack mirrors the
//! call stack exactly because recorder calls arrive in strictly nested order.

use super::tree::{NodeId, RecursionTree};
use crate::core::{Extremes, Range};
use crate::selector::recurse::Recorder;

/// Recorder that builds a [`RecursionTree`] while the selection runs
pub(crate) struct TreeRecorder<T> {
    tree: RecursionTree<T>,
    open: Vec<NodeId>,
}

impl<T: Copy> TreeRecorder<T> {
    pub(crate) fn new() -> Self {
        Self {
            tree: RecursionTree::new(),
            open: Vec::new(),
        }
    }

    /// Consume the recorder, yielding the built tree
    pub(crate) fn into_tree(self) -> RecursionTree<T> {
        self.tree
    }
}

impl<T: Copy> Recorder<T> for TreeRecorder<T> {
    fn enter(&mut self, range: Range, level: usize, values: &[T]) {
        let parent = self.open.last().copied();
        let id = self.tree.open_node(range, level, values, parent);
        self.open.push(id);
    }

    fn leave(&mut self, extremes: Extremes<T>, comparisons: usize) {
        let id = self
            .open
            .pop()
            .expect("leave without a matching enter; recursion guarantees nesting");
        self.tree.finalize(id, extremes, comparisons);
    }
}
