//! Graphviz DOT export
//!
//! The recursion tree's handoff to the external diagram renderer. Node ids
//! are the `"low-high"` range keys; labels carry the sub-range's elements,
//! final extremes, comparison cost, and recursion level.

use crate::trace::RecursionTree;
use std::fmt::Display;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Render a recursion tree as a Graphviz digraph
///
/// One node statement per trace node, one edge statement per parent→child
/// edge, both in creation order.
///
/// # Examples
/// ```
/// use maxmin_select::core::Range;
/// use maxmin_select::render::to_dot;
/// use maxmin_select::selector::select_with_trace;
///
/// let values = [5, 10];
/// let traced = select_with_trace(&values, Range::full(2).unwrap()).unwrap();
///
/// let dot = to_dot(&traced.tree);
/// assert!(dot.starts_with("digraph recursion {"));
/// assert!(dot.contains("\"0-1\""));
/// ```
#[must_use]
pub fn to_dot<T: Copy + Display>(tree: &RecursionTree<T>) -> String {
    let mut out = String::from("digraph recursion {\n");
    out.push_str("    node [shape=box, fontname=\"monospace\"];\n");

    for (_, node) in tree.iter() {
        let id = node_id(node.range().low(), node.range().high());
        // DOT wants literal \n escapes inside labels
        let label = node.label().replace('\n', "\\n");
        let _ = writeln!(out, "    \"{id}\" [label=\"{label}\"];");
    }

    for (parent, child) in tree.edges() {
        let parent = tree.node(*parent).range();
        let child = tree.node(*child).range();
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\";",
            node_id(parent.low(), parent.high()),
            node_id(child.low(), child.high())
        );
    }

    out.push_str("}\n");
    out
}

/// Write the DOT rendering of a tree to a file
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn write_dot<T: Copy + Display, P: AsRef<Path>>(
    tree: &RecursionTree<T>,
    path: P,
) -> io::Result<()> {
    fs::write(path, to_dot(tree))
}

fn node_id(low: usize, high: usize) -> String {
    format!("{low}-{high}")
}
