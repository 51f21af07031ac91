//! Text report layout.
//!
//! ```text
//! ----- Set parameters -----
//! <key> = <value>
//!  ---- Results -----
//! ,No.,Pitcha angle,rpm,angular velocity
//! No.,<index>,<theta>,<rpm>,<omega>,
//! ```

use vf_sim::{DerivedCoefficients, ModelVariant, PdGains, SimRun};

use crate::format::fmt_g;

pub const GYRO_BANNER: &str = "----- Model inclusive of gyroeffect -----";
pub const PARAMETERS_HEADER: &str = "----- Set parameters -----";
pub const RESULTS_HEADER: &str = " ---- Results -----";
pub const COLUMNS_HEADER: &str = ",No.,Pitcha angle,rpm,angular velocity";

/// Parameter snapshot in report order, values already formatted.
pub fn parameter_lines(run: &SimRun) -> Vec<(&'static str, String)> {
    let cfg = &run.config;
    let mut lines = vec![
        ("V0", fmt_g(cfg.throttle_v0)),
        ("Delta", fmt_g(run.coefficients.delta())),
    ];

    match (cfg.model, run.coefficients) {
        (ModelVariant::Gyro { sigma }, DerivedCoefficients::Gyro { xi, .. }) => {
            lines.push(("sigma", fmt_g(sigma)));
            lines.push(("Xi", fmt_g(xi)));
        }
        (ModelVariant::RigidBody { inertia_kg_m2, .. }, DerivedCoefficients::RigidBody(law)) => {
            lines.push(("I", fmt_g(inertia_kg_m2)));
            lines.push(("eta", fmt_g(law.eta)));
        }
        _ => {}
    }

    if !matches!(cfg.model, ModelVariant::RigidBody { .. }) {
        lines.push(("m", fmt_g(cfg.mass_kg)));
        lines.push(("g", fmt_g(cfg.gravity_mps2)));
    }

    lines.extend([
        ("L", fmt_g(cfg.arm_length_m)),
        ("P", fmt_g(cfg.p_gain)),
        ("D", fmt_g(cfg.d_gain)),
        ("h", fmt_g(cfg.dt_s)),
        ("T", cfg.total_steps.to_string()),
        ("tau", cfg.lag_steps.to_string()),
        ("init_theta", fmt_g(cfg.init_theta_rad)),
        ("init_omega", fmt_g(cfg.init_omega_rad_s)),
    ]);
    lines
}

/// Render the full report for a finished run.
pub fn render_report(run: &SimRun) -> String {
    let theta = run.series.theta();
    let omega = run.series.omega();
    let gains = PdGains::from_config(&run.config);

    let mut out = String::with_capacity(64 * theta.len() + 512);

    if matches!(run.config.model, ModelVariant::Gyro { .. }) {
        out.push_str(GYRO_BANNER);
        out.push('\n');
    }
    out.push_str(PARAMETERS_HEADER);
    out.push('\n');
    for (key, value) in parameter_lines(run) {
        out.push_str(&format!("{key} = {value}\n"));
    }

    if let Some(index) = run.stability.first_non_finite {
        out.push_str(&format!(
            "----- Warning: trajectory became non-finite at No.{index} -----\n"
        ));
    }

    out.push_str(RESULTS_HEADER);
    out.push('\n');
    out.push_str(COLUMNS_HEADER);
    out.push('\n');

    for i in 1..theta.len() {
        let rpm = gains.rotor_command(theta[i], theta[i - 1]);
        out.push_str(&format!(
            "No.,{},{},{},{},\n",
            i,
            fmt_g(theta[i]),
            fmt_g(rpm),
            fmt_g(omega[i])
        ));
    }
    out
}
