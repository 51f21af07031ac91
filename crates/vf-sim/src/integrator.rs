//! Fixed-step RK4 integrator for the delayed pitch equation.
//!
//! Integrates the coupled first-order system
//!
//! ```text
//! θ' = ω
//! ω' = lag_force(θ[t-τ], ω[t-τ]) + instant_force(θ, ω)
//! ```
//!
//! The delayed signal is assumed constant over one step, so the lag term is
//! evaluated once per step and shared by all four stages.

use crate::error::{SimError, SimResult};
use crate::forcing::ForcingLaw;
use crate::history::{PitchState, StateHistory};

/// Classical RK4 with a frozen delayed forcing term.
#[derive(Clone, Copy, Debug)]
pub struct DelayedRk4 {
    /// Step size h (s).
    pub dt: f64,
    /// Lag τ in steps.
    pub lag_steps: usize,
}

impl DelayedRk4 {
    pub fn new(dt: f64, lag_steps: usize) -> Self {
        Self { dt, lag_steps }
    }

    /// Advance from index `t` to `t + 1`, writing the new state into `history`.
    ///
    /// Requires `t >= τ` and `t + 1 < capacity`. Non-finite results are
    /// written as-is.
    pub fn step<L, H>(&self, law: &L, history: &mut H, t: usize) -> SimResult<PitchState>
    where
        L: ForcingLaw + ?Sized,
        H: StateHistory + ?Sized,
    {
        if t < self.lag_steps {
            return Err(SimError::PreconditionViolation {
                what: "step index precedes the lag window",
                index: t,
                len: self.lag_steps,
            });
        }
        if t + 1 >= history.capacity() {
            return Err(SimError::PreconditionViolation {
                what: "step would write beyond the series",
                index: t + 1,
                len: history.capacity(),
            });
        }

        let current = history.read(t)?;
        let delayed = history.read(t - self.lag_steps)?;
        let next = self.advance(law, current, delayed);
        history.write(t + 1, next)?;
        Ok(next)
    }

    /// One RK4 update of `current` with the lag term taken from `delayed`.
    pub fn advance<L>(&self, law: &L, current: PitchState, delayed: PitchState) -> PitchState
    where
        L: ForcingLaw + ?Sized,
    {
        let h = self.dt;
        let PitchState { theta, omega } = current;
        let lag = law.lag_force(delayed.theta, delayed.omega);

        let k_theta_1 = h * omega;
        let k_omega_1 = h * (lag + law.instant_force(theta, omega));

        let k_theta_2 = h * (omega + k_omega_1 / 2.0);
        let k_omega_2 =
            h * (lag + law.instant_force(theta + k_theta_1 / 2.0, omega + k_omega_1 / 2.0));

        let k_theta_3 = h * (omega + k_omega_2 / 2.0);
        let k_omega_3 =
            h * (lag + law.instant_force(theta + k_theta_2 / 2.0, omega + k_omega_2 / 2.0));

        let k_theta_4 = h * (omega + k_omega_3);
        let k_omega_4 = h * (lag + law.instant_force(theta + k_theta_3, omega + k_omega_3));

        PitchState {
            theta: theta + (1.0 / 6.0) * (k_theta_1 + 2.0 * k_theta_2 + 2.0 * k_theta_3 + k_theta_4),
            omega: omega + (1.0 / 6.0) * (k_omega_1 + 2.0 * k_omega_2 + 2.0 * k_omega_3 + k_omega_4),
        }
    }
}
