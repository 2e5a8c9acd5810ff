//! Command implementations

pub mod demo;
pub mod select;
pub mod trace;
pub mod verify;

pub use demo::{DemoReport, DemoScenario, default_dot_path, run_demo};
pub use select::{SelectionReport, run_select};
pub use trace::{TraceReport, run_trace};
pub use verify::{TrialFailure, VerifyConfig, VerifyStatistics, run_verify};
