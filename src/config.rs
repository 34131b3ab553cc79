//! Persisted application settings.
//!
//! The last-used function parameters are written to
//! `.expolab/config.toml` so a relaunch resumes where the user left off.
//! Anything out of range in a hand-edited file is clamped on load.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::function::Parameters;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Aggregate application settings loaded from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub parameters: PersistedParameters,
}

/// Function parameters as stored in the TOML file.
///
/// Missing fields fall back to the same defaults the sliders start at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedParameters {
    #[serde(default = "default_coefficient")]
    pub coefficient: f64,
    #[serde(default = "default_basis")]
    pub basis: f64,
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    #[serde(default = "default_x_max")]
    pub x_max: f64,
}

impl Default for PersistedParameters {
    fn default() -> Self {
        Parameters::default().into()
    }
}

impl From<Parameters> for PersistedParameters {
    fn from(params: Parameters) -> Self {
        Self {
            coefficient: params.a,
            basis: params.b,
            x_min: params.x_min,
            x_max: params.x_max,
        }
    }
}

impl From<PersistedParameters> for Parameters {
    fn from(stored: PersistedParameters) -> Self {
        Self {
            a: stored.coefficient,
            b: stored.basis,
            x_min: stored.x_min,
            x_max: stored.x_max,
        }
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from a specific path, returning defaults if missing.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Save configuration to a specific path, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_coefficient() -> f64 {
    Parameters::default().a
}

fn default_basis() -> f64 {
    Parameters::default().b
}

fn default_x_min() -> f64 {
    Parameters::default().x_min
}

fn default_x_max() -> f64 {
    Parameters::default().x_max
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parameters_round_trip_through_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        let cfg = AppConfig {
            parameters: PersistedParameters {
                coefficient: -2.5,
                basis: 0.3,
                x_min: -4.0,
                x_max: 1.0,
            },
        };
        save_to_path(&cfg, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert_eq!(Parameters::from(loaded.parameters), Parameters::default());
    }

    #[test]
    fn missing_fields_fall_back_to_slider_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "[parameters]\ncoefficient = -1.5\n").unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.parameters.coefficient, -1.5);
        assert_eq!(loaded.parameters.basis, Parameters::default().b);
        assert_eq!(loaded.parameters.x_max, Parameters::default().x_max);
    }

    #[test]
    fn corrupt_file_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cfg.toml");
        std::fs::write(&path, "parameters = \"not a table\"").unwrap();
        assert!(matches!(
            load_from_path(&path),
            Err(ConfigError::ParseToml { .. })
        ));
    }

    #[test]
    fn save_resolves_under_config_home_override() {
        let dir = tempdir().unwrap();
        let _guard = crate::app_dirs::ConfigBaseGuard::set(dir.path().to_path_buf());
        let cfg = AppConfig::default();
        save(&cfg).unwrap();
        let expected = dir
            .path()
            .join(app_dirs::APP_DIR_NAME)
            .join(CONFIG_FILE_NAME);
        assert!(expected.is_file());
        assert_eq!(load_or_default().unwrap(), cfg);
    }
}
