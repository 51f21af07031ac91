//! Config loading, saving, validation and preset lookup.

use std::path::Path;

use vf_project::{ConfigFile, PRESET_NAMES, ProjectError};

use crate::error::{AppError, AppResult};

/// A built-in configuration as listed by frontends.
#[derive(Debug, Clone)]
pub struct PresetSummary {
    pub name: &'static str,
    pub description: Option<String>,
    pub model: &'static str,
    pub lag_steps: usize,
    pub total_steps: usize,
}

/// Load and validate a config file (`.json` as JSON, anything else as YAML).
pub fn load_config(path: &Path) -> AppResult<ConfigFile> {
    vf_project::load(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            source
        )),
        other => other.into(),
    })
}

/// Save a config file, choosing the format by extension.
pub fn save_config(path: &Path, file: &ConfigFile) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let saved = if is_json {
        vf_project::save_json(path, file)
    } else {
        vf_project::save_yaml(path, file)
    };

    saved.map_err(|e| match e {
        ProjectError::Io(source) => AppError::ConfigFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

pub fn validate_config(file: &ConfigFile) -> AppResult<()> {
    vf_project::validate_config(file).map_err(|e| AppError::Config(e.to_string()))
}

pub fn resolve_preset(name: &str) -> AppResult<ConfigFile> {
    vf_project::preset(name).ok_or_else(|| AppError::PresetNotFound {
        name: name.to_string(),
        known: PRESET_NAMES.join(", "),
    })
}

pub fn list_presets() -> Vec<PresetSummary> {
    PRESET_NAMES
        .iter()
        .filter_map(|&name| vf_project::preset(name).map(|file| (name, file)))
        .map(|(name, file)| PresetSummary {
            name,
            description: file.description,
            model: file.simulation.model.label(),
            lag_steps: file.simulation.lag_steps,
            total_steps: file.simulation.total_steps,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_lists_known_names() {
        let err = resolve_preset("hexacopter").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("hexacopter"));
        assert!(msg.contains("pidlag, gyroeffect, rigid_body"));
    }

    #[test]
    fn presets_are_listed_in_order() {
        let names: Vec<_> = list_presets().iter().map(|p| p.name).collect();
        assert_eq!(names, PRESET_NAMES);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("/nonexistent/vflight.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/vflight.yaml"));
    }
}
