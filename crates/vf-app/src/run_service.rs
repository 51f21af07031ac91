//! Run execution service.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};
use vf_project::ConfigFile;
use vf_results::{ReportStamp, ReportStore, render_report};
use vf_sim::{DerivedCoefficients, SimProgress, StabilityReport};

use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage, StepProgress};
use crate::project_service;

/// Where a run's configuration comes from.
#[derive(Debug, Clone, Copy)]
pub enum ConfigSource<'a> {
    File(&'a Path),
    Preset(&'a str),
}

impl ConfigSource<'_> {
    pub fn resolve(&self) -> AppResult<ConfigFile> {
        match self {
            ConfigSource::File(path) => project_service::load_config(path),
            ConfigSource::Preset(name) => project_service::resolve_preset(name),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub source: ConfigSource<'a>,
    pub out_dir: PathBuf,
    /// Fixed report stamp; the current local time when `None`.
    pub stamp: Option<ReportStamp>,
}

/// Wall-clock timing for one run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub simulate_time_s: f64,
    pub report_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub config_name: String,
    pub report_path: PathBuf,
    pub coefficients: DerivedCoefficients,
    pub stability: StabilityReport,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
    step: Option<StepProgress>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent {
            stage,
            elapsed_wall_s: started.elapsed().as_secs_f64(),
            message,
            step,
        });
    }
}

/// Derive the lag-law coefficients for a config without running it.
pub fn derive_coefficients(file: &ConfigFile) -> AppResult<DerivedCoefficients> {
    project_service::validate_config(file)?;
    Ok(vf_sim::derive(&file.simulation)?)
}

pub fn execute_run(request: &RunRequest) -> AppResult<RunResponse> {
    execute_run_with_progress(request, None)
}

/// Load, simulate and write the report, streaming progress events.
pub fn execute_run_with_progress(
    request: &RunRequest,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();
    let mut timing = RunTimingSummary::default();

    emit_progress(
        &mut progress_cb,
        RunStage::LoadingConfig,
        started,
        Some("Loading configuration".to_string()),
        None,
    );
    let file = request.source.resolve()?;
    // Open the output directory before integrating so a bad path fails fast.
    let store = ReportStore::new(request.out_dir.clone())?;
    timing.load_time_s = started.elapsed().as_secs_f64();

    info!(
        name = %file.name,
        model = file.simulation.model.label(),
        lag_steps = file.simulation.lag_steps,
        total_steps = file.simulation.total_steps,
        "starting run"
    );
    emit_progress(
        &mut progress_cb,
        RunStage::Simulating,
        started,
        Some(format!("Simulating {}", file.name)),
        None,
    );

    let sim_started = Instant::now();
    let run = {
        let mut on_step = |p: SimProgress| {
            emit_progress(
                &mut progress_cb,
                RunStage::Simulating,
                started,
                None,
                Some(p.into()),
            );
        };
        vf_sim::run_with_progress(&file.simulation, Some(&mut on_step))?
    };
    timing.simulate_time_s = sim_started.elapsed().as_secs_f64();
    timing.steps = run.config.step_count();

    if let Some(index) = run.stability.first_non_finite {
        warn!(index, "run diverged; report will be annotated");
    }

    emit_progress(
        &mut progress_cb,
        RunStage::WritingReport,
        started,
        Some("Writing report".to_string()),
        None,
    );
    let report_started = Instant::now();
    let stamp = request.stamp.unwrap_or_else(ReportStamp::now);
    let report_path = store.write(&stamp, &render_report(&run))?;
    timing.report_time_s = report_started.elapsed().as_secs_f64();
    timing.total_time_s = started.elapsed().as_secs_f64();

    info!(
        path = %report_path.display(),
        simulate_s = timing.simulate_time_s,
        total_s = timing.total_time_s,
        "run finished"
    );
    emit_progress(
        &mut progress_cb,
        RunStage::Completed,
        started,
        Some(format!("Report written to {}", report_path.display())),
        None,
    );

    Ok(RunResponse {
        config_name: file.name,
        report_path,
        coefficients: run.coefficients,
        stability: run.stability,
        timing,
    })
}
