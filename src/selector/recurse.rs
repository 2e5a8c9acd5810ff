//! Recursive divide-and-conquer core
//!
//! One recursion serves every public entry point. Observability is injected
//! through the `Recorder` trait: the no-op recorder is zero-sized, so the
//! untraced entry points monomorphize to plain recursion with no tracing
//! branches left in the hot path.

use crate::core::{Extremes, Range};

/// Observer of the recursion
///
/// `enter` fires when a call begins, `leave` when it returns. Calls nest
/// strictly: every `leave` matches the most recent unmatched `enter`, and a
/// call's `leave` fires only after both child calls have completed.
pub(crate) trait Recorder<T> {
    /// A recursive call on `range` has begun at the given recursion level.
    /// `values` is the slice of elements the range covers.
    fn enter(&mut self, range: Range, level: usize, values: &[T]);

    /// The current call has returned `extremes`. `comparisons` counts only
    /// the comparisons this call performed itself (0 for a singleton, 1 for
    /// a pair, 2 for a combine), not its subtree's.
    fn leave(&mut self, extremes: Extremes<T>, comparisons: usize);
}

/// Recorder that records nothing
pub(crate) struct NoopRecorder;

impl<T> Recorder<T> for NoopRecorder {
    fn enter(&mut self, _range: Range, _level: usize, _values: &[T]) {}
    fn leave(&mut self, _extremes: Extremes<T>, _comparisons: usize) {}
}

/// Find the extremes of `values` over `range`, counting comparisons
///
/// Returns the extremes and the total number of element comparisons performed
/// across the whole subtree of calls.
///
/// Comparison cost per call:
/// - singleton range: 0
/// - two-element range: 1
/// - recursive case: the two halves' totals plus exactly 2 for the merge
///
/// The caller must have bounds-checked `range` against `values` already; the
/// public entry points in `select.rs` do so.
pub(crate) fn select_range<T, R>(
    values: &[T],
    range: Range,
    level: usize,
    recorder: &mut R,
) -> (Extremes<T>, usize)
where
    T: Ord + Copy,
    R: Recorder<T>,
{
    recorder.enter(range, level, &values[range.low()..=range.high()]);

    let (extremes, own_comparisons, total_comparisons) = if range.is_singleton() {
        (Extremes::single(values[range.low()]), 0, 0)
    } else if range.is_pair() {
        let extremes = Extremes::ordered(values[range.low()], values[range.high()]);
        (extremes, 1, 1)
    } else {
        let (left, right) = range.split();
        let (left_extremes, left_total) = select_range(values, left, level + 1, recorder);
        let (right_extremes, right_total) = select_range(values, right, level + 1, recorder);
        let extremes = left_extremes.combine(right_extremes);
        (extremes, 2, left_total + right_total + 2)
    };

    recorder.leave(extremes, own_comparisons);
    (extremes, total_comparisons)
}
