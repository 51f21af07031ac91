//! Shared application service layer for vflight.
//!
//! Frontends go through this crate to load and validate run configurations,
//! resolve presets, execute a run end to end and write its report.

pub mod error;
pub mod progress;
pub mod project_service;
pub mod run_service;

pub use error::{AppError, AppResult};
pub use progress::{RunProgressEvent, RunStage, StepProgress};
pub use project_service::{
    PresetSummary, list_presets, load_config, resolve_preset, save_config, validate_config,
};
pub use run_service::{
    ConfigSource, RunRequest, RunResponse, RunTimingSummary, derive_coefficients, execute_run,
    execute_run_with_progress,
};
