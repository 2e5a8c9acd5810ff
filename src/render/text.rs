//! Terminal tree rendering
//!
//! Plain-text, box-drawing rendering of a recursion tree, one call per line.
//! Kept free of color codes so it is testable and pipeable; the display layer
//! decides how to dress it up.

use crate::trace::{NodeId, RecursionTree, TraceNode};
use std::fmt::Display;
use std::fmt::Write as _;

/// Render a recursion tree as an indented box-drawing listing
///
/// # Examples
/// ```
/// use maxmin_select::core::Range;
/// use maxmin_select::render::render_text;
/// use maxmin_select::selector::select_with_trace;
///
/// let values = [5, 10, 2];
/// let traced = select_with_trace(&values, Range::full(3).unwrap()).unwrap();
///
/// let listing = render_text(&traced.tree);
/// assert!(listing.contains("└── "));
/// ```
#[must_use]
pub fn render_text<T: Copy + Display>(tree: &RecursionTree<T>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        let _ = writeln!(out, "{}", summary(tree.node(root)));
        render_children(tree, root, "", &mut out);
    }
    out
}

fn render_children<T: Copy + Display>(
    tree: &RecursionTree<T>,
    id: NodeId,
    prefix: &str,
    out: &mut String,
) {
    let children = tree.children(id);
    for (position, child) in children.iter().enumerate() {
        let last = position == children.len() - 1;
        let connector = if last { "└── " } else { "├── " };
        let _ = writeln!(out, "{prefix}{connector}{}", summary(tree.node(*child)));

        let child_prefix = if last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(tree, *child, &child_prefix, out);
    }
}

fn summary<T: Copy + Display>(node: &TraceNode<T>) -> String {
    let elements = node
        .values()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    match node.extremes() {
        Some(extremes) => format!(
            "{} [{elements}] min={} max={} ({} comp)",
            node.range(),
            extremes.min(),
            extremes.max(),
            node.comparisons()
        ),
        None => format!("{} [{elements}]", node.range()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Range;
    use crate::selector::select_with_trace;

    #[test]
    fn single_node_listing() {
        let traced = select_with_trace(&[42], Range::full(1).unwrap()).unwrap();
        let listing = render_text(&traced.tree);
        assert_eq!(listing, "[0..0] [42] min=42 max=42 (0 comp)\n");
    }

    #[test]
    fn listing_has_one_line_per_node() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let traced = select_with_trace(&values, Range::full(values.len()).unwrap()).unwrap();
        let listing = render_text(&traced.tree);
        assert_eq!(listing.lines().count(), traced.tree.len());
    }

    #[test]
    fn listing_shape_for_three_elements() {
        let traced = select_with_trace(&[5, 10, 2], Range::full(3).unwrap()).unwrap();
        let listing = render_text(&traced.tree);
        let lines: Vec<&str> = listing.lines().collect();

        assert_eq!(lines[0], "[0..2] [5, 10, 2] min=2 max=10 (2 comp)");
        assert_eq!(lines[1], "├── [0..1] [5, 10] min=5 max=10 (1 comp)");
        assert_eq!(lines[2], "└── [2..2] [2] min=2 max=2 (0 comp)");
    }

    #[test]
    fn nested_levels_are_indented() {
        let values: Vec<i64> = (0..6).collect();
        let traced = select_with_trace(&values, Range::full(6).unwrap()).unwrap();
        let listing = render_text(&traced.tree);

        // Grandchildren sit under an extended prefix
        assert!(listing.contains("│   ├── ") || listing.contains("│   └── "));
        assert!(listing.contains("    ├── ") || listing.contains("    └── "));
    }

    #[test]
    fn listing_is_free_of_color_codes() {
        let traced = select_with_trace(&[3, 1, 2], Range::full(3).unwrap()).unwrap();
        assert!(!render_text(&traced.tree).contains('\u{1b}'));
    }
}
