//! Divide-and-conquer min/max selection
//!
//! The recursive core finds both extremes of a range in roughly 3n/2
//! comparisons instead of the naive scan's 2n - 2, by solving singleton and
//! pair ranges directly and merging halves with exactly two comparisons.

pub(crate) mod recurse;
mod select;

pub use select::{TracedSelection, select, select_counting, select_with_trace};
