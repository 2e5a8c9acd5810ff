//! Selection command
//!
//! Runs the divide-and-conquer selection over a full sequence and gathers the
//! comparison-economy figures for display.

use crate::core::{Extremes, Range};
use crate::selector::select_counting;

/// Result of a selection run
#[derive(Debug)]
pub struct SelectionReport {
    pub values: Vec<i64>,
    pub extremes: Extremes<i64>,
    pub comparisons: usize,
    /// Cost of the naive simultaneous scan over the same sequence: 2n - 2
    pub naive_comparisons: usize,
    /// The pairing-optimal reference count: ceil(3n/2) - 2
    pub pairing_optimal: usize,
}

/// Comparisons a naive simultaneous min/max scan performs on `n` elements
#[must_use]
pub const fn naive_comparisons(n: usize) -> usize {
    if n < 2 { 0 } else { 2 * n - 2 }
}

/// The pairing-optimal comparison count for `n` elements: ceil(3n/2) - 2
#[must_use]
pub const fn pairing_optimal(n: usize) -> usize {
    if n < 2 { 0 } else { (3 * n).div_ceil(2) - 2 }
}

/// Select the extremes of a full sequence
///
/// # Errors
///
/// Returns an error if the sequence is empty.
pub fn run_select(values: Vec<i64>) -> Result<SelectionReport, String> {
    let range = Range::full(values.len()).map_err(|e| e.to_string())?;
    let (extremes, comparisons) =
        select_counting(&values, range).map_err(|e| e.to_string())?;

    let n = values.len();
    Ok(SelectionReport {
        values,
        extremes,
        comparisons,
        naive_comparisons: naive_comparisons(n),
        pairing_optimal: pairing_optimal(n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_reports_extremes() {
        let report = run_select(vec![1000, 11, 445, 1, 330, 3000]).unwrap();
        assert_eq!(report.extremes.into_pair(), (1, 3000));
        assert_eq!(report.comparisons, 8);
        assert_eq!(report.naive_comparisons, 10);
        assert_eq!(report.pairing_optimal, 7);
    }

    #[test]
    fn select_single_element() {
        let report = run_select(vec![42]).unwrap();
        assert_eq!(report.extremes.into_pair(), (42, 42));
        assert_eq!(report.comparisons, 0);
        assert_eq!(report.naive_comparisons, 0);
    }

    #[test]
    fn select_empty_sequence_is_an_error() {
        let result = run_select(vec![]);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("empty"));
    }

    #[test]
    fn reference_counts() {
        assert_eq!(naive_comparisons(1), 0);
        assert_eq!(naive_comparisons(2), 2);
        assert_eq!(naive_comparisons(6), 10);

        assert_eq!(pairing_optimal(1), 0);
        assert_eq!(pairing_optimal(2), 1);
        assert_eq!(pairing_optimal(5), 6);
        assert_eq!(pairing_optimal(6), 7);
        assert_eq!(pairing_optimal(8), 10);
    }

    #[test]
    fn report_keeps_input_values() {
        let report = run_select(vec![3, 1, 2]).unwrap();
        assert_eq!(report.values, vec![3, 1, 2]);
    }
}
