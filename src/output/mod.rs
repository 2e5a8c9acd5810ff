//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_demo_report, print_selection_report, print_trace_report, print_verify_statistics,
};
