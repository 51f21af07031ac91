//! Closed-form coefficients of the lagged forcing law.
//!
//! Thrust is taken as proportional to the squared rotor command, and the rotor
//! command follows the PD law around the equilibrium throttle:
//!
//! ```text
//! command = V0 - P·θ - D·ω
//! lag acceleration = Δ/(m·L) · command²
//!                  = a + b·θ + c·θ² + d·ω + e·θ·ω + j·ω²
//! ```
//!
//! With Δ = m·g/V0² the constant term balances gravity at θ = 0 (a = −s = g/L).

use serde::{Deserialize, Serialize};

use crate::config::{ModelVariant, SimulationConfig};
use crate::error::SimResult;

/// Quadratic lag polynomial plus the gravity torque coefficient `s`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagPolynomial {
    /// Rotor command to force coefficient Δ.
    pub delta: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub j: f64,
    /// Gravity torque coefficient, multiplies cos(θ) of the current state.
    pub s: f64,
}

impl LagPolynomial {
    fn from_config(config: &SimulationConfig) -> Self {
        let SimulationConfig {
            throttle_v0: v0,
            mass_kg: m,
            gravity_mps2: g,
            arm_length_m: l,
            p_gain: p,
            d_gain: d,
            ..
        } = *config;

        let delta = m * g / (v0 * v0);
        Self {
            delta,
            a: delta * v0 * v0 / (m * l),
            b: -2.0 * delta * v0 * p / (m * l),
            c: delta * p * p / (m * l),
            d: -2.0 * d * delta * v0 / (m * l),
            e: 2.0 * d * p * delta / (m * l),
            j: delta * d * d / (m * l),
            s: -g / l,
        }
    }

    /// `a + b·θ + c·θ² + d·ω + e·θ·ω + j·ω²` at the delayed state.
    #[inline]
    pub fn eval(&self, theta: f64, omega: f64) -> f64 {
        self.a
            + self.b * theta
            + self.c * theta * theta
            + self.d * omega
            + self.e * theta * omega
            + self.j * omega * omega
    }
}

/// Linear lag law of the rigid-body model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyLaw {
    /// Fixed rotor command to force coefficient Δ.
    pub delta: f64,
    /// L·Δ·V0 / I.
    pub gain: f64,
    pub p: f64,
    pub d: f64,
    /// 4·Δ·L·V0 / I. Reported only.
    pub eta: f64,
}

impl RigidBodyLaw {
    /// `−4·(L·Δ·V0/I)·(P·θ + D·ω)` at the delayed state.
    #[inline]
    pub fn eval(&self, theta: f64, omega: f64) -> f64 {
        -4.0 * self.gain * (self.p * theta + self.d * omega)
    }
}

/// Coefficients derived once per run from a [`SimulationConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DerivedCoefficients {
    Pid(LagPolynomial),
    Gyro {
        poly: LagPolynomial,
        /// −σ/(m·L), multiplies the current (not delayed) angular velocity.
        xi: f64,
    },
    RigidBody(RigidBodyLaw),
}

impl DerivedCoefficients {
    /// Thrust coefficient Δ, derived or fixed depending on the variant.
    pub fn delta(&self) -> f64 {
        match self {
            DerivedCoefficients::Pid(poly) | DerivedCoefficients::Gyro { poly, .. } => poly.delta,
            DerivedCoefficients::RigidBody(law) => law.delta,
        }
    }
}

/// Derive the forcing coefficients for `config`.
///
/// Pure: the same config always yields the same coefficients. Fails with
/// `InvalidConfiguration` before any division by a zero parameter.
pub fn derive(config: &SimulationConfig) -> SimResult<DerivedCoefficients> {
    config.validate()?;

    let coefficients = match config.model {
        ModelVariant::Pid => DerivedCoefficients::Pid(LagPolynomial::from_config(config)),
        ModelVariant::Gyro { sigma } => DerivedCoefficients::Gyro {
            poly: LagPolynomial::from_config(config),
            xi: -sigma / (config.mass_kg * config.arm_length_m),
        },
        ModelVariant::RigidBody {
            inertia_kg_m2: inertia,
            delta,
        } => {
            let l = config.arm_length_m;
            let v0 = config.throttle_v0;
            DerivedCoefficients::RigidBody(RigidBodyLaw {
                delta,
                gain: l * delta * v0 / inertia,
                p: config.p_gain,
                d: config.d_gain,
                eta: 4.0 * delta * l * v0 / inertia,
            })
        }
    };
    Ok(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use vf_core::{Tolerances, nearly_equal};

    fn golden_config() -> SimulationConfig {
        SimulationConfig {
            throttle_v0: 13000.0,
            mass_kg: 0.45,
            gravity_mps2: 9.8,
            arm_length_m: 0.215,
            p_gain: 5000.0,
            d_gain: 1000.0,
            dt_s: 0.01,
            lag_steps: 20,
            total_steps: 2000,
            init_theta_rad: 0.5,
            init_omega_rad_s: 0.0,
            model: ModelVariant::Pid,
        }
    }

    const REL: Tolerances = Tolerances {
        abs: 0.0,
        rel: 1e-12,
    };

    #[test]
    fn golden_pid_coefficients() {
        let DerivedCoefficients::Pid(poly) = derive(&golden_config()).unwrap() else {
            panic!("expected pid coefficients");
        };

        assert!(nearly_equal(poly.delta, 2.6094674556213017e-08, REL));
        // a = g/L analytically
        assert!(nearly_equal(poly.a, 9.8 / 0.215, REL));
        assert!(nearly_equal(poly.a, 45.58139534883721, REL));
        assert!(nearly_equal(poly.b, -35.062611806797854, REL));
        assert!(nearly_equal(poly.c, 6.74280996284574, REL));
        assert!(nearly_equal(poly.d, -7.01252236135957, REL));
        assert!(nearly_equal(poly.e, 2.697123985138296, REL));
        assert!(nearly_equal(poly.j, 0.2697123985138296, REL));
        assert!(nearly_equal(poly.s, -45.58139534883721, REL));
    }

    #[test]
    fn gyro_adds_xi() {
        let mut cfg = golden_config();
        cfg.model = ModelVariant::Gyro { sigma: 1.0 };
        let DerivedCoefficients::Gyro { poly, xi } = derive(&cfg).unwrap() else {
            panic!("expected gyro coefficients");
        };
        assert!(nearly_equal(xi, -10.335917312661499, REL));
        assert_eq!(DerivedCoefficients::Pid(poly), derive(&golden_config()).unwrap());
    }

    #[test]
    fn rigid_body_uses_fixed_delta() {
        let mut cfg = golden_config();
        cfg.arm_length_m = 0.37;
        cfg.p_gain = 300.0;
        cfg.d_gain = 300.0;
        cfg.model = ModelVariant::RigidBody {
            inertia_kg_m2: 0.01,
            delta: 1.0e-8,
        };
        let DerivedCoefficients::RigidBody(law) = derive(&cfg).unwrap() else {
            panic!("expected rigid body law");
        };
        assert_eq!(law.delta, 1.0e-8);
        assert!(nearly_equal(law.eta, 0.01924, REL));
        assert!(nearly_equal(law.eval(1.0, 0.0), -0.01924 * 300.0, Tolerances::default()));
    }

    #[test]
    fn zero_gains_reduce_to_constant() {
        let mut cfg = golden_config();
        cfg.p_gain = 0.0;
        cfg.d_gain = 0.0;
        let DerivedCoefficients::Pid(poly) = derive(&cfg).unwrap() else {
            panic!("expected pid coefficients");
        };
        assert_eq!(poly.eval(0.3, -1.7), poly.a);
    }

    #[test]
    fn zero_mass_is_invalid() {
        let mut cfg = golden_config();
        cfg.mass_kg = 0.0;
        assert!(matches!(
            derive(&cfg),
            Err(SimError::InvalidConfiguration { .. })
        ));
    }
}
