//! Recursion tracing
//!
//! An arena-backed tree with one node per recursive call, built depth-first
//! while a traced selection runs. Purely an observability side channel: the
//! traced and untraced entry points return identical results.

mod recorder;
mod tree;

pub(crate) use recorder::TreeRecorder;
pub use tree::{NodeId, RecursionTree, TraceNode};
