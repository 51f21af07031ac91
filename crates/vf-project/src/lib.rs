//! vf-project: run configuration file format, presets and validation.

pub mod presets;
pub mod schema;
pub mod validate;

pub use presets::{PRESET_NAMES, preset};
pub use schema::*;
pub use validate::{ValidationError, validate_config};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = serde_yaml::from_str(&content)?;
    validate_config(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &Path, file: &ConfigFile) -> ProjectResult<()> {
    validate_config(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = serde_json::from_str(&content)?;
    validate_config(&file)?;
    Ok(file)
}

pub fn save_json(path: &Path, file: &ConfigFile) -> ProjectResult<()> {
    validate_config(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &Path) -> ProjectResult<ConfigFile> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
