//! Public selection entry points
//!
//! Three doors into the same recursive core: `select` for just the extremes,
//! `select_counting` when the caller wants the comparison count, and
//! `select_with_trace` to additionally capture the recursion tree.

use super::recurse::{self, NoopRecorder};
use crate::core::{Extremes, Range, RangeError};
use crate::trace::{RecursionTree, TreeRecorder};

/// Result of a traced selection
#[derive(Debug, Clone)]
pub struct TracedSelection<T> {
    pub extremes: Extremes<T>,
    pub comparisons: usize,
    pub tree: RecursionTree<T>,
}

/// Find the minimum and maximum of `values` over `range`
///
/// Divide and conquer: singleton and pair ranges are solved directly, larger
/// ranges split at the floor midpoint and merge with exactly two comparisons.
///
/// # Errors
/// Returns `RangeError::OutOfBounds` if `range` does not fit in `values`.
/// Inverted ranges are unrepresentable ([`Range::new`] rejects them).
///
/// # Examples
/// ```
/// use maxmin_select::core::Range;
/// use maxmin_select::selector::select;
///
/// let values = [1000, 11, 445, 1, 330, 3000];
/// let range = Range::full(values.len()).unwrap();
///
/// let extremes = select(&values, range).unwrap();
/// assert_eq!(extremes.min(), 1);
/// assert_eq!(extremes.max(), 3000);
/// ```
pub fn select<T: Ord + Copy>(values: &[T], range: Range) -> Result<Extremes<T>, RangeError> {
    range.check_bounds(values.len())?;
    let (extremes, _) = recurse::select_range(values, range, 0, &mut NoopRecorder);
    Ok(extremes)
}

/// Like [`select`], also reporting the number of comparisons performed
///
/// # Errors
/// Returns `RangeError::OutOfBounds` if `range` does not fit in `values`.
///
/// # Examples
/// ```
/// use maxmin_select::core::Range;
/// use maxmin_select::selector::select_counting;
///
/// let values = [5, 10];
/// let range = Range::full(values.len()).unwrap();
///
/// let (extremes, comparisons) = select_counting(&values, range).unwrap();
/// assert_eq!(extremes.into_pair(), (5, 10));
/// assert_eq!(comparisons, 1);
/// ```
pub fn select_counting<T: Ord + Copy>(
    values: &[T],
    range: Range,
) -> Result<(Extremes<T>, usize), RangeError> {
    range.check_bounds(values.len())?;
    Ok(recurse::select_range(values, range, 0, &mut NoopRecorder))
}

/// Like [`select`], additionally recording the recursion as a tree
///
/// Tracing changes neither the extremes nor the comparison count; it only
/// captures one node per recursive call, finalized as each call returns.
///
/// # Errors
/// Returns `RangeError::OutOfBounds` if `range` does not fit in `values`.
pub fn select_with_trace<T: Ord + Copy>(
    values: &[T],
    range: Range,
) -> Result<TracedSelection<T>, RangeError> {
    range.check_bounds(values.len())?;
    let mut recorder = TreeRecorder::new();
    let (extremes, comparisons) = recurse::select_range(values, range, 0, &mut recorder);
    Ok(TracedSelection {
        extremes,
        comparisons,
        tree: recorder.into_tree(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_full_range() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::full(values.len()).unwrap();
        let extremes = select(&values, range).unwrap();
        assert_eq!(extremes.into_pair(), (1, 3000));
    }

    #[test]
    fn select_single_element() {
        let extremes = select(&[42], Range::full(1).unwrap()).unwrap();
        assert_eq!(extremes.into_pair(), (42, 42));
    }

    #[test]
    fn select_pair_either_order() {
        assert_eq!(
            select(&[5, 10], Range::full(2).unwrap())
                .unwrap()
                .into_pair(),
            (5, 10)
        );
        assert_eq!(
            select(&[10, 5], Range::full(2).unwrap())
                .unwrap()
                .into_pair(),
            (5, 10)
        );
    }

    #[test]
    fn select_rejects_out_of_bounds() {
        let values = [1, 2, 3];
        let range = Range::new(1, 5).unwrap();
        assert!(matches!(
            select(&values, range),
            Err(RangeError::OutOfBounds { high: 5, len: 3 })
        ));
    }

    #[test]
    fn select_is_idempotent() {
        let values = [9, -3, 14, 0, 7];
        let range = Range::full(values.len()).unwrap();
        let first = select(&values, range).unwrap();
        let second = select(&values, range).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn select_agrees_with_naive_scan() {
        for n in 1..=40 {
            let values: Vec<i64> = (0..n).map(|i| (i * 37 + 11) % 23 - 10).collect();
            let range = Range::full(values.len()).unwrap();
            let extremes = select(&values, range).unwrap();
            assert_eq!(extremes.min(), *values.iter().min().unwrap());
            assert_eq!(extremes.max(), *values.iter().max().unwrap());
        }
    }

    #[test]
    fn counting_matches_plain_select() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::full(values.len()).unwrap();
        let extremes = select(&values, range).unwrap();
        let (counted, comparisons) = select_counting(&values, range).unwrap();
        assert_eq!(extremes, counted);
        assert_eq!(comparisons, 8);
    }

    #[test]
    fn trace_does_not_change_the_answer() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::full(values.len()).unwrap();

        let (extremes, comparisons) = select_counting(&values, range).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        assert_eq!(traced.extremes, extremes);
        assert_eq!(traced.comparisons, comparisons);
    }

    #[test]
    fn trace_has_one_node_per_call() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::full(values.len()).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        // [0..5] -> [0..2] -> ([0..1], [2..2]), [3..5] -> ([3..4], [5..5])
        assert_eq!(traced.tree.len(), 7);
        assert_eq!(traced.tree.leaf_count(), 4);
        assert_eq!(traced.tree.depth(), 2);
    }

    #[test]
    fn trace_internal_nodes_have_two_children() {
        let values: Vec<i64> = (0..13).collect();
        let range = Range::full(values.len()).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        for (id, node) in traced.tree.iter() {
            let children = traced.tree.children(id);
            if node.range().size() <= 2 {
                assert!(children.is_empty(), "base case {} has children", node.range());
            } else {
                assert_eq!(children.len(), 2, "internal {} malformed", node.range());
            }
        }
    }

    #[test]
    fn trace_children_partition_parent_range() {
        let values: Vec<i64> = (0..9).collect();
        let range = Range::full(values.len()).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        for (id, node) in traced.tree.iter() {
            let children = traced.tree.children(id);
            if let [left, right] = children[..] {
                let left = traced.tree.node(left).range();
                let right = traced.tree.node(right).range();
                assert_eq!(left.low(), node.range().low());
                assert_eq!(right.high(), node.range().high());
                assert_eq!(left.high() + 1, right.low());
            }
        }
    }

    #[test]
    fn trace_node_comparisons_sum_to_total() {
        for n in [1usize, 2, 3, 6, 7, 16, 31] {
            let values: Vec<i64> = (0..n as i64).rev().collect();
            let range = Range::full(n).unwrap();
            let traced = select_with_trace(&values, range).unwrap();
            assert_eq!(traced.tree.total_comparisons(), traced.comparisons);
        }
    }

    #[test]
    fn trace_root_spans_requested_range() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::new(1, 4).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        let root = traced.tree.root().unwrap();
        assert_eq!(traced.tree.node(root).range(), range);
        assert_eq!(traced.extremes.into_pair(), (1, 445));
    }

    #[test]
    fn trace_nodes_finalized_with_true_extremes() {
        let values = [1000, 11, 445, 1, 330, 3000];
        let range = Range::full(values.len()).unwrap();
        let traced = select_with_trace(&values, range).unwrap();

        for (_, node) in traced.tree.iter() {
            let extremes = node.extremes().expect("every node finalized");
            assert_eq!(extremes.min(), *node.values().iter().min().unwrap());
            assert_eq!(extremes.max(), *node.values().iter().max().unwrap());
        }
    }

    #[test]
    fn trace_rejects_out_of_bounds() {
        let range = Range::new(0, 10).unwrap();
        assert!(select_with_trace(&[1, 2, 3], range).is_err());
    }
}
