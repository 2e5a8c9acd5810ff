//! Recursion tree arena
//!
//! One node per recursive call, owned by the enclosing `RecursionTree`.
//! Nodes are opened when a call begins and finalized when it returns, so a
//! fully built tree has extremes on every node. Parent→child relations are
//! kept as an explicit edge list, and nodes are also indexed by their
//! `(low, high)` range, which occurs at most once per call tree.

use crate::core::{Extremes, Range};
use rustc_hash::FxHashMap;
use std::fmt;

/// Handle to a node inside a [`RecursionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the tree's arena (creation order)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single recursive call, as recorded in the tree
#[derive(Debug, Clone)]
pub struct TraceNode<T> {
    range: Range,
    level: usize,
    values: Vec<T>,
    parent: Option<NodeId>,
    extremes: Option<Extremes<T>>,
    comparisons: usize,
}

impl<T: Copy> TraceNode<T> {
    /// The index range this call covered
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Recursion depth of the call (root is level 0)
    #[inline]
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// The elements of the sub-range, in sequence order
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The parent call's node, or `None` for the root
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The call's computed extremes, present once the call has returned
    #[inline]
    #[must_use]
    pub const fn extremes(&self) -> Option<Extremes<T>> {
        self.extremes
    }

    /// Comparisons performed by this call itself: 0 for a singleton,
    /// 1 for a pair, 2 for a combine step
    #[inline]
    #[must_use]
    pub const fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl<T: Copy + fmt::Display> TraceNode<T> {
    /// Multi-line display label: elements, extremes, comparison cost, level
    #[must_use]
    pub fn label(&self) -> String {
        let elements = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match self.extremes {
            Some(extremes) => format!(
                "[{elements}]\nmin={} max={}\n{} comp\nlevel {}",
                extremes.min(),
                extremes.max(),
                self.comparisons,
                self.level
            ),
            None => format!("[{elements}]\nlevel {}", self.level),
        }
    }
}

/// The recursion tree of one traced selection
///
/// Structural guarantees once fully built: one node per recursive call, every
/// internal node has exactly two children, leaves are exactly the singleton
/// and pair base cases, and the sum of per-node comparisons equals the
/// selection's total comparison count.
#[derive(Debug, Clone)]
pub struct RecursionTree<T> {
    nodes: Vec<TraceNode<T>>,
    edges: Vec<(NodeId, NodeId)>,
    by_range: FxHashMap<(usize, usize), NodeId>,
}

impl<T: Copy> RecursionTree<T> {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            by_range: FxHashMap::default(),
        }
    }

    /// Record the start of a recursive call
    ///
    /// Adds a node for `range`, links it under `parent` if given, and indexes
    /// it by range. The node carries no extremes until [`Self::finalize`].
    pub fn open_node(
        &mut self,
        range: Range,
        level: usize,
        values: &[T],
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TraceNode {
            range,
            level,
            values: values.to_vec(),
            parent,
            extremes: None,
            comparisons: 0,
        });
        self.by_range.insert((range.low(), range.high()), id);
        if let Some(parent) = parent {
            self.edges.push((parent, id));
        }
        id
    }

    /// Record the return of a recursive call
    ///
    /// `comparisons` is the call's own cost (0, 1, or 2), not its subtree's.
    pub fn finalize(&mut self, id: NodeId, extremes: Extremes<T>, comparisons: usize) {
        let node = &mut self.nodes[id.0];
        node.extremes = Some(extremes);
        node.comparisons = comparisons;
    }

    /// The root node, or `None` for an empty tree
    ///
    /// The root is always the first node opened.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    /// Look up a node by handle
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TraceNode<T> {
        &self.nodes[id.0]
    }

    /// Look up a node by its range, if that range was recursed on
    #[must_use]
    pub fn node_by_range(&self, range: Range) -> Option<NodeId> {
        self.by_range.get(&(range.low(), range.high())).copied()
    }

    /// Children of a node, in call order
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|(parent, _)| *parent == id)
            .map(|(_, child)| *child)
            .collect()
    }

    /// Number of nodes (= number of recursive calls)
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaf nodes (= number of base-case calls)
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.range.size() <= 2)
            .count()
    }

    /// Deepest recursion level in the tree
    #[must_use]
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|node| node.level).max().unwrap_or(0)
    }

    /// Sum of per-node comparison costs
    ///
    /// Equals the total comparison count of the traced selection.
    #[must_use]
    pub fn total_comparisons(&self) -> usize {
        self.nodes.iter().map(|node| node.comparisons).sum()
    }

    /// Iterate over all nodes with their handles, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TraceNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// The explicit parent→child edge list, in creation order
    #[must_use]
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}

impl<T: Copy> Default for RecursionTree<T> {
    fn default() -> Self {
        Self::new()
    }
}
