use std::path::PathBuf;

use vf_project::*;
use vf_sim::ModelVariant;

fn configs_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

#[test]
fn yaml_roundtrip() {
    let temp_dir = std::env::temp_dir().join("vf_project_yaml_roundtrip");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("gyro.yaml");

    let original = presets::gyroeffect();
    save_yaml(&path, &original).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn json_roundtrip() {
    let temp_dir = std::env::temp_dir().join("vf_project_json_roundtrip");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("rigid.json");

    let original = presets::rigid_body();
    save_json(&path, &original).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn shipped_configs_match_presets() {
    for name in PRESET_NAMES {
        let path = configs_dir().join(format!("{name}.yaml"));
        let loaded = load(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert_eq!(loaded, preset(name).unwrap(), "{name}");
    }
}

#[test]
fn handwritten_yaml_parses() {
    let yaml = r#"
version: 1
name: custom
simulation:
  throttle_v0: 6500.0
  mass_kg: 1.0
  gravity_mps2: 9.8
  arm_length_m: 0.37
  p_gain: 5000.0
  d_gain: 1000.0
  dt_s: 0.005
  lag_steps: 10
  total_steps: 400
  init_theta_rad: 0.2
  init_omega_rad_s: 0.1
  model:
    type: gyro
    sigma: 0.5
"#;
    let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();
    validate_config(&file).unwrap();
    assert_eq!(file.description, None);
    assert_eq!(file.simulation.model, ModelVariant::Gyro { sigma: 0.5 });
}

#[test]
fn invalid_file_is_not_saved() {
    let temp_dir = std::env::temp_dir().join("vf_project_invalid_save");
    let _ = std::fs::remove_dir_all(&temp_dir);
    std::fs::create_dir_all(&temp_dir).unwrap();
    let path = temp_dir.join("bad.yaml");

    let mut file = presets::pidlag();
    file.simulation.dt_s = 0.0;
    assert!(matches!(
        save_yaml(&path, &file),
        Err(ProjectError::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let err = load(&configs_dir().join("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, ProjectError::Io(_)));
}
