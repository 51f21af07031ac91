//! Run configuration for the delayed pitch model.

use serde::{Deserialize, Serialize};
use vf_core::{Angle, Time, ensure_finite, ensure_nonzero};

use crate::error::{SimError, SimResult};

/// Which lag-forcing law drives the pitch dynamics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelVariant {
    /// PD thrust law linearized around the equilibrium throttle, with gravity torque.
    Pid,
    /// As `Pid`, plus a gyroscopic term acting on the current angular velocity.
    Gyro {
        /// Gyroscopic scale.
        sigma: f64,
    },
    /// Rigid body with moment of inertia and a fixed thrust coefficient. No gravity torque.
    RigidBody {
        /// Moment of inertia about the pitch axis (kg·m²).
        inertia_kg_m2: f64,
        /// Rotor command to force coefficient.
        delta: f64,
    },
}

impl ModelVariant {
    pub fn label(&self) -> &'static str {
        match self {
            ModelVariant::Pid => "pid",
            ModelVariant::Gyro { .. } => "gyro",
            ModelVariant::RigidBody { .. } => "rigid_body",
        }
    }
}

/// Immutable parameter set for one run.
///
/// Angles are in radians, the throttle is a rotor speed command (rpm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Equilibrium throttle V0.
    pub throttle_v0: f64,
    /// Body mass m (kg).
    pub mass_kg: f64,
    /// Gravity g (m/s²).
    pub gravity_mps2: f64,
    /// Distance from center to motor L (m).
    pub arm_length_m: f64,
    /// Proportional gain P.
    pub p_gain: f64,
    /// Derivative gain D.
    pub d_gain: f64,
    /// Fixed step size h (s).
    pub dt_s: f64,
    /// Lag τ in steps; the lag duration is τ·h.
    pub lag_steps: usize,
    /// Total step count T.
    pub total_steps: usize,
    /// Initial pitch angle θ₀.
    pub init_theta_rad: f64,
    /// Initial angular velocity ω₀.
    pub init_omega_rad_s: f64,
    pub model: ModelVariant,
}

impl SimulationConfig {
    /// Check every precondition of coefficient derivation and the step loop.
    pub fn validate(&self) -> SimResult<()> {
        ensure_nonzero(self.throttle_v0, "throttle_v0 must be finite and non-zero")?;
        ensure_nonzero(self.arm_length_m, "arm_length_m must be finite and non-zero")?;
        ensure_finite(self.gravity_mps2, "gravity_mps2 must be finite")?;
        ensure_finite(self.p_gain, "p_gain must be finite")?;
        ensure_finite(self.d_gain, "d_gain must be finite")?;
        ensure_finite(self.init_theta_rad, "init_theta_rad must be finite")?;
        ensure_finite(self.init_omega_rad_s, "init_omega_rad_s must be finite")?;

        if !(self.dt_s.is_finite() && self.dt_s > 0.0) {
            return Err(SimError::InvalidConfiguration {
                what: "dt_s must be positive",
            });
        }
        if self.total_steps < 2 {
            return Err(SimError::InvalidConfiguration {
                what: "total_steps must be at least 2",
            });
        }
        if self.total_steps <= self.lag_steps {
            return Err(SimError::InvalidConfiguration {
                what: "total_steps must exceed lag_steps",
            });
        }

        match self.model {
            ModelVariant::Pid => {
                ensure_nonzero(self.mass_kg, "mass_kg must be finite and non-zero")?;
            }
            ModelVariant::Gyro { sigma } => {
                ensure_nonzero(self.mass_kg, "mass_kg must be finite and non-zero")?;
                ensure_finite(sigma, "sigma must be finite")?;
            }
            ModelVariant::RigidBody {
                inertia_kg_m2,
                delta,
            } => {
                ensure_nonzero(inertia_kg_m2, "inertia_kg_m2 must be finite and non-zero")?;
                ensure_finite(delta, "delta must be finite")?;
            }
        }
        Ok(())
    }

    /// Length of the state series, T + τ.
    pub fn series_len(&self) -> usize {
        self.total_steps + self.lag_steps
    }

    /// Number of RK4 steps performed by a run, T − 1.
    pub fn step_count(&self) -> usize {
        self.total_steps.saturating_sub(1)
    }

    pub fn lag_duration(&self) -> Time {
        vf_core::s(self.lag_steps as f64 * self.dt_s)
    }

    /// Simulated span covered by the integrated steps.
    pub fn duration(&self) -> Time {
        vf_core::s(self.step_count() as f64 * self.dt_s)
    }

    pub fn init_theta(&self) -> Angle {
        vf_core::rad(self.init_theta_rad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SimulationConfig {
        SimulationConfig {
            throttle_v0: 1.30e4,
            mass_kg: 0.45,
            gravity_mps2: 9.8,
            arm_length_m: 0.215,
            p_gain: 10000.0,
            d_gain: 100.0,
            dt_s: 0.01,
            lag_steps: 1,
            total_steps: 1000,
            init_theta_rad: 0.5,
            init_omega_rad_s: 0.0,
            model: ModelVariant::Pid,
        }
    }

    #[test]
    fn valid_config_passes() {
        base().validate().unwrap();
    }

    #[test]
    fn zero_denominators_rejected() {
        let mutations: [fn(&mut SimulationConfig); 4] = [
            |c| c.mass_kg = 0.0,
            |c| c.arm_length_m = 0.0,
            |c| c.throttle_v0 = 0.0,
            |c| c.dt_s = 0.0,
        ];
        for mutate in mutations {
            let mut cfg = base();
            mutate(&mut cfg);
            assert!(matches!(
                cfg.validate(),
                Err(SimError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn zero_inertia_rejected_for_rigid_body() {
        let mut cfg = base();
        cfg.model = ModelVariant::RigidBody {
            inertia_kg_m2: 0.0,
            delta: 1.0e-8,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rigid_body_ignores_mass() {
        let mut cfg = base();
        cfg.mass_kg = 0.0;
        cfg.model = ModelVariant::RigidBody {
            inertia_kg_m2: 0.01,
            delta: 1.0e-8,
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn step_bounds() {
        let mut cfg = base();
        cfg.total_steps = 1;
        cfg.lag_steps = 0;
        assert!(cfg.validate().is_err());

        cfg.total_steps = 5;
        cfg.lag_steps = 5;
        assert!(cfg.validate().is_err());

        cfg.lag_steps = 4;
        cfg.validate().unwrap();
        assert_eq!(cfg.series_len(), 9);
        assert_eq!(cfg.step_count(), 4);
    }

    #[test]
    fn lag_duration_in_seconds() {
        let mut cfg = base();
        cfg.lag_steps = 20;
        assert!((vf_core::secs(cfg.lag_duration()) - 0.2).abs() < 1e-12);
    }
}
