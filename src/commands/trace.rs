//! Trace command
//!
//! Runs a traced selection, renders the recursion tree for the terminal, and
//! writes the Graphviz diagram for the external renderer.

use crate::core::{Extremes, Range};
use crate::render::{render_text, write_dot};
use crate::selector::select_with_trace;
use std::path::{Path, PathBuf};

/// Result of a traced selection run
#[derive(Debug)]
pub struct TraceReport {
    pub extremes: Extremes<i64>,
    pub comparisons: usize,
    pub node_count: usize,
    pub leaf_count: usize,
    pub depth: usize,
    /// Box-drawing rendering of the recursion tree
    pub listing: String,
    /// Where the DOT diagram was written, if requested
    pub dot_path: Option<PathBuf>,
}

/// Trace the selection over a full sequence
///
/// # Errors
///
/// Returns an error if the sequence is empty or the DOT file cannot be
/// written.
pub fn run_trace(values: &[i64], dot_path: Option<&Path>) -> Result<TraceReport, String> {
    let range = Range::full(values.len()).map_err(|e| e.to_string())?;
    let traced = select_with_trace(values, range).map_err(|e| e.to_string())?;

    if let Some(path) = dot_path {
        write_dot(&traced.tree, path)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }

    Ok(TraceReport {
        extremes: traced.extremes,
        comparisons: traced.comparisons,
        node_count: traced.tree.len(),
        leaf_count: traced.tree.leaf_count(),
        depth: traced.tree.depth(),
        listing: render_text(&traced.tree),
        dot_path: dot_path.map(Path::to_path_buf),
    })
}
