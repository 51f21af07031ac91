//! Built-in configurations for the three pitch models.

use vf_sim::{ModelVariant, SimulationConfig};

use crate::schema::ConfigFile;

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 3] = ["pidlag", "gyroeffect", "rigid_body"];

/// Look up a built-in configuration by name.
pub fn preset(name: &str) -> Option<ConfigFile> {
    match name {
        "pidlag" => Some(pidlag()),
        "gyroeffect" => Some(gyroeffect()),
        "rigid_body" => Some(rigid_body()),
        _ => None,
    }
}

/// PD law with a one-step lag.
pub fn pidlag() -> ConfigFile {
    ConfigFile::new(
        "pidlag",
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
        },
    )
    .with_description("PID control with a time lag between signal and propeller speed")
}

/// PD law with gyroscopic damping and a 0.2 s lag.
pub fn gyroeffect() -> ConfigFile {
    ConfigFile::new(
        "gyroeffect",
        SimulationConfig {
            throttle_v0: 1.30e4,
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
            model: ModelVariant::Gyro { sigma: 1.0 },
        },
    )
    .with_description("PID control with a time lag, model inclusive of gyroeffect")
}

/// Rigid body with a fixed thrust coefficient.
pub fn rigid_body() -> ConfigFile {
    ConfigFile::new(
        "rigid_body",
        SimulationConfig {
            throttle_v0: 1.30e4,
            mass_kg: 0.45,
            gravity_mps2: 9.8,
            arm_length_m: 0.37,
            p_gain: 300.0,
            d_gain: 300.0,
            dt_s: 0.01,
            lag_steps: 20,
            total_steps: 2000,
            init_theta_rad: 0.5,
            init_omega_rad_s: 0.0,
            model: ModelVariant::RigidBody {
                inertia_kg_m2: 0.01,
                delta: 1.0e-8,
            },
        },
    )
    .with_description("PID control with a time lag, drone as a rigid body")
}
