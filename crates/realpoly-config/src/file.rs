//! JSON settings file loading.

use std::path::Path;

use realpoly::{AppSettings, GlobalSettings, Polynomial, Tolerance};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ConfigError;

/// File name looked up by [`apply_default_settings_file`].
pub const DEFAULT_SETTINGS_FILE: &str = "AppSettings.json";

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(rename = "Epsilon")]
    epsilon: EpsilonValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EpsilonValue {
    Number(f64),
    Text(String),
}

impl EpsilonValue {
    fn into_f64(self) -> Result<f64, ConfigError> {
        match self {
            EpsilonValue::Number(v) => Ok(v),
            EpsilonValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::NotANumber(s)),
        }
    }
}

/// Parses settings from JSON text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed JSON or a missing `Epsilon`,
/// [`ConfigError::NotANumber`] for a non-numeric string and
/// [`ConfigError::InvalidEpsilon`] for a negative or NaN value.
pub fn parse_settings(json: &str) -> Result<AppSettings, ConfigError> {
    let file: SettingsFile = serde_json::from_str(json)?;
    let epsilon = file.epsilon.into_f64()?;
    let settings = AppSettings { epsilon };
    settings.tolerance()?;
    Ok(settings)
}

/// Reads settings from a JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_settings`].
pub fn load_settings(path: &Path) -> Result<AppSettings, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&json)
}

/// Loads `path` into `target`, keeping the current value on failure.
///
/// Returns the tolerance in effect afterwards.
pub fn apply_settings_file_to(path: &Path, target: &GlobalSettings) -> f64 {
    let applied = load_settings(path).and_then(|settings| {
        target.apply(&settings)?;
        Ok(settings)
    });

    match applied {
        Ok(settings) => {
            info!(path = %path.display(), epsilon = settings.epsilon, "applied polynomial tolerance");
        }
        Err(err) => {
            debug!(
                path = %path.display(),
                error = %err,
                epsilon = target.epsilon(),
                "keeping current polynomial tolerance"
            );
        }
    }

    target.epsilon()
}

/// Loads `path` into the process-wide polynomial settings.
///
/// Never fails; see [`apply_settings_file_to`].
pub fn apply_settings_file(path: &Path) -> f64 {
    apply_settings_file_to(path, Polynomial::app_settings())
}

/// Loads [`DEFAULT_SETTINGS_FILE`] from `dir` into the process-wide settings.
pub fn apply_default_settings_file(dir: &Path) -> Tolerance {
    let epsilon = apply_settings_file(&dir.join(DEFAULT_SETTINGS_FILE));
    Tolerance::new(epsilon).unwrap_or_default()
}
