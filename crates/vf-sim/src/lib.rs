//! Delayed-feedback pitch simulation for rotor-driven bodies.
//!
//! Provides:
//! - Coefficient derivation from physical constants and PD gains
//! - Lag forcing laws (PID, PID with gyroscopic term, rigid body)
//! - Append-only delayed state history
//! - Fixed-step RK4 integrator with a frozen delayed forcing term
//! - Simulation driver and post-run stability scan

pub mod coefficients;
pub mod config;
pub mod controller;
pub mod error;
pub mod forcing;
pub mod history;
pub mod integrator;
pub mod sim;
pub mod stability;

// Re-exports for public API
pub use coefficients::{DerivedCoefficients, LagPolynomial, RigidBodyLaw, derive};
pub use config::{ModelVariant, SimulationConfig};
pub use controller::PdGains;
pub use error::{SimError, SimResult};
pub use forcing::ForcingLaw;
pub use history::{PitchState, StateHistory, StateSeries};
pub use integrator::DelayedRk4;
pub use sim::{SimProgress, SimRun, integrate, run, run_with_progress};
pub use stability::StabilityReport;
