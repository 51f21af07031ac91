//! Error types for the vf-app service layer.

use std::path::PathBuf;

/// Unified error for CLI and any other frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Unknown preset: {name} (expected one of {known})")]
    PresetNotFound { name: String, known: String },

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<vf_project::ProjectError> for AppError {
    fn from(err: vf_project::ProjectError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<vf_sim::SimError> for AppError {
    fn from(err: vf_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<vf_results::ResultsError> for AppError {
    fn from(err: vf_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
