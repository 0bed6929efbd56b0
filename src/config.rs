use crate::error::{FilekitError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::error;

/// Loads an optional TOML settings file into `T`.
///
/// Returns `None` when the file is missing or does not parse; that failure
/// path emits one error-level event and never propagates. Run without a
/// subscriber installed to keep failures silent.
pub fn safely_include<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match try_include(path) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("{e}");
            None
        }
    }
}

/// Like [`safely_include`], returning `default` on the failure path.
pub fn safely_include_or<T: DeserializeOwned>(path: &Path, default: T) -> T {
    safely_include(path).unwrap_or(default)
}

/// Fallible core of [`safely_include`], kept separate so the failure class
/// stays observable.
pub fn try_include<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(FilekitError::SettingsNotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
