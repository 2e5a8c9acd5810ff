//! Max/Min Selector
//!
//! Simultaneous minimum/maximum selection using divide and conquer, with an
//! optional recursion-tree trace for visualization. The recursive core uses
//! roughly 3n/2 comparisons instead of the naive scan's 2n - 2.
//!
//! # Quick Start
//!
//! ```rust
//! use maxmin_select::core::Range;
//! use maxmin_select::selector::select;
//!
//! let values = [1000, 11, 445, 1, 330, 3000];
//! let range = Range::full(values.len()).unwrap();
//!
//! let extremes = select(&values, range).unwrap();
//! assert_eq!(extremes.min(), 1);
//! assert_eq!(extremes.max(), 3000);
//! ```

// Core domain types
pub mod core;

// Divide-and-conquer selection
pub mod selector;

// Recursion tracing
pub mod trace;

// Tree rendering (DOT and terminal)
pub mod render;

// Sequence acquisition
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
