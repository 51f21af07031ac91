//! Post-run scan for numerical blow-up.

use serde::{Deserialize, Serialize};

use crate::history::PitchState;

/// Summary of how well-behaved a finished trajectory is.
///
/// A diverged trajectory is still a valid run result; callers annotate it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StabilityReport {
    /// First index whose θ or ω is NaN or infinite.
    pub first_non_finite: Option<usize>,
    /// Largest |θ| over the finite part of the trajectory.
    pub peak_abs_theta: f64,
    /// |θ| at the last index.
    pub final_abs_theta: f64,
}

impl StabilityReport {
    pub fn scan<I>(states: I) -> Self
    where
        I: IntoIterator<Item = PitchState>,
    {
        let mut report = Self::default();
        for (index, state) in states.into_iter().enumerate() {
            if !state.is_finite() {
                if report.first_non_finite.is_none() {
                    report.first_non_finite = Some(index);
                }
                report.final_abs_theta = state.theta.abs();
                continue;
            }
            report.peak_abs_theta = report.peak_abs_theta.max(state.theta.abs());
            report.final_abs_theta = state.theta.abs();
        }
        report
    }

    pub fn is_finite(&self) -> bool {
        self.first_non_finite.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_trajectory() {
        let report = StabilityReport::scan([
            PitchState::new(0.5, 0.0),
            PitchState::new(-0.7, 1.0),
            PitchState::new(0.1, 0.0),
        ]);
        assert!(report.is_finite());
        assert_eq!(report.peak_abs_theta, 0.7);
        assert_eq!(report.final_abs_theta, 0.1);
    }

    #[test]
    fn first_nan_index_is_kept() {
        let report = StabilityReport::scan([
            PitchState::new(0.5, 0.0),
            PitchState::new(1.0e300, f64::INFINITY),
            PitchState::new(f64::NAN, f64::NAN),
        ]);
        assert_eq!(report.first_non_finite, Some(1));
        assert_eq!(report.peak_abs_theta, 0.5);
    }
}
