//! Forcing laws evaluated by the integrator.

use crate::coefficients::DerivedCoefficients;

/// Angular acceleration contributions of a pitch model.
///
/// The acceleration is split into a delayed part, evaluated at the state τ steps
/// back, and an instantaneous part evaluated at the current RK4 stage estimate.
pub trait ForcingLaw {
    /// Acceleration from the lagged control/thrust law.
    ///
    /// Held constant across all four RK4 stages of one step.
    fn lag_force(&self, theta_lag: f64, omega_lag: f64) -> f64;

    /// Acceleration from terms acting on the current stage state.
    fn instant_force(&self, theta: f64, omega: f64) -> f64;
}

impl ForcingLaw for DerivedCoefficients {
    #[inline]
    fn lag_force(&self, theta_lag: f64, omega_lag: f64) -> f64 {
        match self {
            DerivedCoefficients::Pid(poly) | DerivedCoefficients::Gyro { poly, .. } => {
                poly.eval(theta_lag, omega_lag)
            }
            DerivedCoefficients::RigidBody(law) => law.eval(theta_lag, omega_lag),
        }
    }

    #[inline]
    fn instant_force(&self, theta: f64, omega: f64) -> f64 {
        match self {
            DerivedCoefficients::Pid(poly) => poly.s * theta.cos(),
            DerivedCoefficients::Gyro { poly, xi } => poly.s * theta.cos() + xi * omega,
            // The rigid-body model carries no gravity or gyroscopic term.
            DerivedCoefficients::RigidBody(_) => 0.0,
        }
    }
}

impl<L: ForcingLaw + ?Sized> ForcingLaw for &L {
    #[inline]
    fn lag_force(&self, theta_lag: f64, omega_lag: f64) -> f64 {
        (**self).lag_force(theta_lag, omega_lag)
    }

    #[inline]
    fn instant_force(&self, theta: f64, omega: f64) -> f64 {
        (**self).instant_force(theta, omega)
    }
}
