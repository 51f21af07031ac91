use chrono::NaiveDate;
use vf_results::{ReportStamp, ReportStore, render_report};
use vf_sim::{ModelVariant, SimulationConfig};

const PID_SHORT: &str = include_str!("fixtures/pid_short.txt");
const GYRO_SHORT: &str = include_str!("fixtures/gyro_short.txt");

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
        total_steps: 6,
        init_theta_rad: 0.5,
        init_omega_rad_s: 0.0,
        model: ModelVariant::Pid,
    }
}

fn fixed_stamp() -> ReportStamp {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(8, 4, 0))
        .unwrap();
    ReportStamp::from_datetime(dt)
}

#[test]
fn pid_report_matches_fixture() {
    let run = vf_sim::run(&base()).unwrap();
    assert_eq!(render_report(&run), PID_SHORT);
}

#[test]
fn gyro_report_matches_fixture() {
    let cfg = SimulationConfig {
        p_gain: 5000.0,
        d_gain: 1000.0,
        lag_steps: 2,
        total_steps: 5,
        model: ModelVariant::Gyro { sigma: 1.0 },
        ..base()
    };
    let run = vf_sim::run(&cfg).unwrap();
    assert_eq!(render_report(&run), GYRO_SHORT);
}

#[test]
fn diverged_run_is_annotated() {
    let cfg = SimulationConfig {
        p_gain: 1.0e5,
        init_theta_rad: 50.0,
        total_steps: 40,
        ..base()
    };
    let run = vf_sim::run(&cfg).unwrap();
    let index = run.stability.first_non_finite.unwrap();

    let text = render_report(&run);
    let warning = format!("----- Warning: trajectory became non-finite at No.{index} -----");
    let lines: Vec<&str> = text.lines().collect();
    let warn_at = lines.iter().position(|l| *l == warning).unwrap();
    assert_eq!(lines[warn_at - 1], "init_omega = 0");
    assert_eq!(lines[warn_at + 1], " ---- Results -----");
    assert!(text.contains("nan"));
}

#[test]
fn store_writes_stamped_report() {
    let temp_dir = std::env::temp_dir().join("vf_results_store");
    let _ = std::fs::remove_dir_all(&temp_dir);

    let store = ReportStore::new(temp_dir.join("reports")).unwrap();
    let run = vf_sim::run(&base()).unwrap();
    let path = store.save_run(&run, &fixed_stamp()).unwrap();

    assert_eq!(path.file_name().unwrap(), "vflight-2024-3-9-8-4-0.txt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), PID_SHORT);
    assert_eq!(
        store.list_reports().unwrap(),
        vec!["vflight-2024-3-9-8-4-0.txt".to_string()]
    );
}

#[test]
fn unwritable_target_reports_path() {
    let temp_dir = std::env::temp_dir().join("vf_results_unwritable");
    let _ = std::fs::remove_dir_all(&temp_dir);
    let store = ReportStore::new(temp_dir.clone()).unwrap();

    // A directory squatting on the report name makes the write fail.
    std::fs::create_dir_all(store.report_path(&fixed_stamp())).unwrap();
    let err = store.write(&fixed_stamp(), "x").unwrap_err();
    assert!(err.to_string().contains("vflight-2024-3-9-8-4-0.txt"));
}
