//! Configuration file validation.

use crate::schema::{ConfigFile, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} ({reason})")]
    InvalidValue { field: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_config(file: &ConfigFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    if file.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    file.simulation
        .validate()
        .map_err(|e| ValidationError::InvalidValue {
            field: "simulation".to_string(),
            reason: e.to_string(),
        })
}
