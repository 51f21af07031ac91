//! Append-only state history with look-back by the lag count.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Pitch state at one discrete step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchState {
    /// Pitch angle θ (rad).
    pub theta: f64,
    /// Angular velocity ω (rad/s).
    pub omega: f64,
}

impl PitchState {
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }
}

/// Storage the integrator reads delayed states from and appends to.
///
/// Each index is written exactly once, in increasing order; reads are only
/// valid for indices already written.
pub trait StateHistory {
    /// Total number of slots.
    fn capacity(&self) -> usize;

    /// Number of slots written so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self, index: usize) -> SimResult<PitchState>;

    fn write(&mut self, index: usize, state: PitchState) -> SimResult<()>;
}

/// Pre-sized θ and ω sequences indexed by step number.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSeries {
    theta: Vec<f64>,
    omega: Vec<f64>,
    written: usize,
}

impl StateSeries {
    /// Allocate `capacity` slots; nothing is readable until written.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            theta: vec![0.0; capacity],
            omega: vec![0.0; capacity],
            written: 0,
        }
    }

    /// Written pitch angles.
    pub fn theta(&self) -> &[f64] {
        &self.theta[..self.written]
    }

    /// Written angular velocities.
    pub fn omega(&self) -> &[f64] {
        &self.omega[..self.written]
    }

    pub fn is_complete(&self) -> bool {
        self.written == self.theta.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PitchState> + '_ {
        self.theta()
            .iter()
            .zip(self.omega())
            .map(|(&theta, &omega)| PitchState { theta, omega })
    }
}

impl StateHistory for StateSeries {
    fn capacity(&self) -> usize {
        self.theta.len()
    }

    fn len(&self) -> usize {
        self.written
    }

    fn read(&self, index: usize) -> SimResult<PitchState> {
        if index >= self.written {
            return Err(SimError::PreconditionViolation {
                what: "read of unwritten history index",
                index,
                len: self.written,
            });
        }
        Ok(PitchState {
            theta: self.theta[index],
            omega: self.omega[index],
        })
    }

    fn write(&mut self, index: usize, state: PitchState) -> SimResult<()> {
        if index >= self.theta.len() {
            return Err(SimError::PreconditionViolation {
                what: "write beyond history capacity",
                index,
                len: self.theta.len(),
            });
        }
        if index != self.written {
            return Err(SimError::PreconditionViolation {
                what: "history writes must be sequential",
                index,
                len: self.written,
            });
        }
        self.theta[index] = state.theta;
        self.omega[index] = state.omega;
        self.written += 1;
        Ok(())
    }
}
