//! PD rotor command reconstruction.
//!
//! Reporting only: the integrator consumes the derived lag coefficients, never
//! this value.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Proportional and derivative gains around an equilibrium throttle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdGains {
    pub throttle_v0: f64,
    pub p: f64,
    pub d: f64,
    /// Step size used for the backward-difference derivative.
    pub dt: f64,
}

impl PdGains {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            throttle_v0: config.throttle_v0,
            p: config.p_gain,
            d: config.d_gain,
            dt: config.dt_s,
        }
    }

    /// `V0 − P·θ − D·(θ − θ_prev)/h`
    pub fn rotor_command(&self, theta: f64, theta_prev: f64) -> f64 {
        self.throttle_v0 - self.p * theta - self.d * (theta - theta_prev) / self.dt
    }

    /// Rotor command for every index `1..theta.len()`.
    pub fn rotor_commands(&self, theta: &[f64]) -> Vec<f64> {
        theta
            .windows(2)
            .map(|w| self.rotor_command(w[1], w[0]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gains() -> PdGains {
        PdGains {
            throttle_v0: 13000.0,
            p: 10000.0,
            d: 100.0,
            dt: 0.01,
        }
    }

    #[test]
    fn equilibrium_gives_v0() {
        assert_eq!(gains().rotor_command(0.0, 0.0), 13000.0);
    }

    #[test]
    fn backward_difference() {
        // 13000 − 10000·0.5 − 100·(0.5 − 0.49)/0.01
        let rpm = gains().rotor_command(0.5, 0.49);
        assert!((rpm - 7900.0).abs() < 1e-6);
    }

    #[test]
    fn commands_start_at_index_one() {
        let rpm = gains().rotor_commands(&[0.5, 0.5, 0.4]);
        assert_eq!(rpm.len(), 2);
        assert_eq!(rpm[0], 8000.0);
    }
}
