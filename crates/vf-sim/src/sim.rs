//! Simulation driver: seeds the lag window and runs the step loop.

use tracing::{debug, info, warn};

use crate::coefficients::{DerivedCoefficients, derive};
use crate::config::SimulationConfig;
use crate::error::{SimError, SimResult};
use crate::forcing::ForcingLaw;
use crate::history::{PitchState, StateHistory, StateSeries};
use crate::integrator::DelayedRk4;
use crate::stability::StabilityReport;

/// Progress after one completed integration step.
#[derive(Clone, Copy, Debug)]
pub struct SimProgress {
    /// Steps completed so far (1-based).
    pub step: usize,
    /// Steps in the whole run, T − 1.
    pub total_steps: usize,
    pub fraction_complete: f64,
    /// Simulated time reached since the end of the lag window (s).
    pub sim_time_s: f64,
}

/// A finished run: the filled series plus everything needed to report it.
#[derive(Clone, Debug)]
pub struct SimRun {
    pub config: SimulationConfig,
    pub coefficients: DerivedCoefficients,
    pub series: StateSeries,
    pub stability: StabilityReport,
}

/// Run a full simulation for `config`.
pub fn run(config: &SimulationConfig) -> SimResult<SimRun> {
    run_with_progress(config, None)
}

/// Run a full simulation, reporting progress after each step.
pub fn run_with_progress(
    config: &SimulationConfig,
    progress: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<SimRun> {
    let coefficients = derive(config)?;
    debug!(?coefficients, "derived lag-law coefficients");

    let mut series = StateSeries::with_capacity(config.series_len());
    integrate(config, &coefficients, &mut series, progress)?;

    let stability = StabilityReport::scan(series.iter());
    debug!(
        peak_abs_theta = stability.peak_abs_theta,
        final_abs_theta = stability.final_abs_theta,
        "trajectory summary"
    );

    Ok(SimRun {
        config: config.clone(),
        coefficients,
        series,
        stability,
    })
}

/// Seed `history` with the initial condition over `0..=τ` and integrate
/// `t = τ ..= τ+T-2` in order.
///
/// `history` must be empty with room for `T + τ` states.
pub fn integrate<L, H>(
    config: &SimulationConfig,
    law: &L,
    history: &mut H,
    mut progress: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<()>
where
    L: ForcingLaw + ?Sized,
    H: StateHistory + ?Sized,
{
    config.validate()?;
    let lag = config.lag_steps;
    let len = config.series_len();

    if !history.is_empty() {
        return Err(SimError::PreconditionViolation {
            what: "history must be empty before seeding",
            index: 0,
            len: history.len(),
        });
    }
    if history.capacity() < len {
        return Err(SimError::PreconditionViolation {
            what: "history too short for T + tau states",
            index: len,
            len: history.capacity(),
        });
    }

    let initial = PitchState::new(config.init_theta_rad, config.init_omega_rad_s);
    for index in 0..=lag {
        history.write(index, initial)?;
    }

    let rk4 = DelayedRk4::new(config.dt_s, lag);
    let total_steps = config.step_count();
    info!(
        model = config.model.label(),
        lag_steps = lag,
        total_steps,
        dt_s = config.dt_s,
        "starting delayed pitch integration"
    );

    let mut diverged = false;
    for (n, t) in (lag..lag + total_steps).enumerate() {
        let next = rk4.step(law, history, t)?;

        if !diverged && !next.is_finite() {
            diverged = true;
            warn!(
                index = t + 1,
                theta = next.theta,
                omega = next.omega,
                "trajectory became non-finite"
            );
        }

        if let Some(cb) = progress.as_deref_mut() {
            let step = n + 1;
            cb(SimProgress {
                step,
                total_steps,
                fraction_complete: step as f64 / total_steps as f64,
                sim_time_s: step as f64 * config.dt_s,
            });
        }
    }

    info!(written = history.len(), "integration finished");
    Ok(())
}
