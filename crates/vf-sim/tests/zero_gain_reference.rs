//! With zero gains the delayed law is a constant and the model is a forced pendulum.

use vf_sim::{DerivedCoefficients, ModelVariant, SimulationConfig, derive, run};

fn zero_gain_config(lag_steps: usize) -> SimulationConfig {
    SimulationConfig {
        throttle_v0: 1.30e4,
        mass_kg: 0.45,
        gravity_mps2: 9.8,
        arm_length_m: 0.215,
        p_gain: 0.0,
        d_gain: 0.0,
        dt_s: 0.01,
        lag_steps,
        total_steps: 50,
        init_theta_rad: 0.5,
        init_omega_rad_s: 0.0,
        model: ModelVariant::Gyro { sigma: 0.0 },
    }
}

/// Textbook RK4 on θ' = ω, ω' = s·cos(θ) + a.
fn reference(a: f64, s: f64, h: f64, theta0: f64, omega0: f64, steps: usize) -> Vec<(f64, f64)> {
    let f = |theta: f64| s * theta.cos() + a;
    let mut out = vec![(theta0, omega0)];
    let (mut theta, mut omega) = (theta0, omega0);
    for _ in 0..steps {
        let k1t = omega;
        let k1w = f(theta);
        let k2t = omega + 0.5 * h * k1w;
        let k2w = f(theta + 0.5 * h * k1t);
        let k3t = omega + 0.5 * h * k2w;
        let k3w = f(theta + 0.5 * h * k2t);
        let k4t = omega + h * k3w;
        let k4w = f(theta + h * k3t);
        theta += h / 6.0 * (k1t + 2.0 * k2t + 2.0 * k3t + k4t);
        omega += h / 6.0 * (k1w + 2.0 * k2w + 2.0 * k3w + k4w);
        out.push((theta, omega));
    }
    out
}

#[test]
fn matches_reference_pendulum() {
    for lag in [0, 1, 7] {
        let cfg = zero_gain_config(lag);
        let (a, s) = match derive(&cfg).unwrap() {
            DerivedCoefficients::Gyro { poly, xi } => {
                assert_eq!(xi, 0.0);
                (poly.a, poly.s)
            }
            other => panic!("unexpected coefficients {other:?}"),
        };

        let sim = run(&cfg).unwrap();
        let expected = reference(a, s, cfg.dt_s, 0.5, 0.0, cfg.step_count());

        let theta = &sim.series.theta()[lag..];
        let omega = &sim.series.omega()[lag..];
        assert_eq!(theta.len(), expected.len());
        for (i, &(et, ew)) in expected.iter().enumerate() {
            assert!((theta[i] - et).abs() < 1e-9, "lag {lag} theta[{i}]");
            assert!((omega[i] - ew).abs() < 1e-9, "lag {lag} omega[{i}]");
        }
    }
}
