//! Demonstration command
//!
//! The canonical fixed scenarios: a six-element sequence traced with a
//! diagram, a singleton, and the two-element pair in both orders. Each result
//! is checked against its expected extremes.

use super::trace::{TraceReport, run_trace};
use crate::core::Range;
use crate::selector::select;
use std::path::{Path, PathBuf};

/// One fixed scenario and its outcome
pub struct DemoScenario {
    pub values: Vec<i64>,
    pub expected: (i64, i64),
    pub actual: (i64, i64),
    pub passed: bool,
}

/// Result of the demonstration run
pub struct DemoReport {
    pub scenarios: Vec<DemoScenario>,
    /// Traced run of the first scenario, diagram included
    pub trace: TraceReport,
    pub all_passed: bool,
}

const SCENARIOS: &[(&[i64], (i64, i64))] = &[
    (&[1000, 11, 445, 1, 330, 3000], (1, 3000)),
    (&[42], (42, 42)),
    (&[5, 10], (5, 10)),
    (&[10, 5], (5, 10)),
];

/// Run the canonical scenarios, writing the first one's diagram to `dot_path`
///
/// # Errors
///
/// Returns an error if the diagram file cannot be written.
pub fn run_demo(dot_path: Option<&Path>) -> Result<DemoReport, String> {
    let (first_values, _) = SCENARIOS[0];
    let trace = run_trace(first_values, dot_path)?;

    let mut scenarios = Vec::with_capacity(SCENARIOS.len());
    for (values, expected) in SCENARIOS {
        let range = Range::full(values.len()).map_err(|e| e.to_string())?;
        let extremes = select(values, range).map_err(|e| e.to_string())?;
        let actual = extremes.into_pair();
        scenarios.push(DemoScenario {
            values: values.to_vec(),
            expected: *expected,
            actual,
            passed: actual == *expected,
        });
    }

    let all_passed = scenarios.iter().all(|s| s.passed);
    Ok(DemoReport {
        scenarios,
        trace,
        all_passed,
    })
}

/// The dot file the demo writes when no path is given
#[must_use]
pub fn default_dot_path() -> PathBuf {
    PathBuf::from("demo_recursion.dot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenarios_all_pass() {
        let report = run_demo(None).unwrap();
        assert!(report.all_passed);
        assert_eq!(report.scenarios.len(), 4);
        for scenario in &report.scenarios {
            assert_eq!(scenario.actual, scenario.expected);
        }
    }

    #[test]
    fn demo_covers_the_canonical_inputs() {
        let report = run_demo(None).unwrap();
        assert_eq!(report.scenarios[0].values, vec![1000, 11, 445, 1, 330, 3000]);
        assert_eq!(report.scenarios[0].actual, (1, 3000));
        assert_eq!(report.scenarios[1].actual, (42, 42));
        assert_eq!(report.scenarios[2].actual, (5, 10));
        assert_eq!(report.scenarios[3].actual, (5, 10));
    }

    #[test]
    fn demo_traces_the_six_element_scenario() {
        let report = run_demo(None).unwrap();
        assert_eq!(report.trace.node_count, 7);
        assert_eq!(report.trace.comparisons, 8);
    }

    #[test]
    fn demo_writes_diagram_when_asked() {
        let path = std::env::temp_dir().join(format!(
            "maxmin_select_demo_{}.dot",
            std::process::id()
        ));

        let report = run_demo(Some(path.as_path())).unwrap();
        assert!(report.trace.dot_path.is_some());
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
