//! Error types for simulation operations.

use thiserror::Error;
use vf_core::VfError;

/// Errors encountered while deriving coefficients or integrating a run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Degenerate or non-finite physical parameters, detected before integration.
    #[error("Invalid configuration: {what}")]
    InvalidConfiguration { what: &'static str },

    /// Contract violation by the caller (step index, history bounds, write order).
    #[error("Precondition violated: {what} (index={index}, len={len})")]
    PreconditionViolation {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<VfError> for SimError {
    fn from(e: VfError) -> Self {
        match e {
            VfError::NonFinite { what, .. } | VfError::InvalidArg { what } => {
                SimError::InvalidConfiguration { what }
            }
            VfError::IndexOob { what, index, len } => {
                SimError::PreconditionViolation { what, index, len }
            }
        }
    }
}
