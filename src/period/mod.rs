//! Period analysis over ordered color sequences.
//!
//! - [`autocorr`]: autocorrelation peaks, advisory period candidates.
//! - [`prefix`]: exact minimal period via the prefix function.
//! - [`sequence`]: validated color sequences built from bead records.

pub mod autocorr;
pub mod prefix;
pub mod sequence;

pub use autocorr::{autocorrelation, autocorrelation_period};
pub use prefix::{minimal_period, prefix_function};
pub use sequence::ColorSequence;

use serde::Serialize;

/// Candidate and exact periods of one color sequence.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAnalysis {
    pub sequence: ColorSequence,
    pub candidate_periods: Vec<usize>,
    pub minimal_period: Option<usize>,
}

impl PeriodAnalysis {
    pub fn analyze(sequence: ColorSequence) -> Self {
        let candidate_periods = autocorrelation_period(&sequence);
        let minimal_period = minimal_period(&sequence);
        Self {
            sequence,
            candidate_periods,
            minimal_period,
        }
    }

    /// Whether the exact period shows up among the autocorrelation candidates.
    pub fn candidates_agree(&self) -> bool {
        self.minimal_period
            .is_some_and(|p| self.candidate_periods.contains(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_combines_both_estimators() {
        let seq = ColorSequence::new(vec![0, 1, 2, 0, 1, 2, 0, 1, 2], 3).unwrap();
        let analysis = PeriodAnalysis::analyze(seq);
        assert_eq!(analysis.minimal_period, Some(3));
        assert!(analysis.candidates_agree(), "{analysis:?}");
    }

    #[test]
    fn single_bead_has_period_one_and_no_candidates() {
        let analysis = PeriodAnalysis::analyze(ColorSequence::new(vec![1], 2).unwrap());
        assert_eq!(analysis.minimal_period, Some(1));
        assert!(analysis.candidate_periods.is_empty());
        assert!(!analysis.candidates_agree());
    }
}
