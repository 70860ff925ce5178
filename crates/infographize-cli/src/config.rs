//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use infographize::{InfographizeError, config::AppConfig};

/// Local configuration path, relative to the working directory.
const LOCAL_CONFIG: &str = "infographize/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ConfigError> for InfographizeError {
    fn from(err: ConfigError) -> Self {
        InfographizeError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (infographize/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(
    explicit_path: Option<impl AsRef<Path>>,
) -> Result<AppConfig, InfographizeError> {
    let system_dir = ProjectDirs::from("com", "infographize", "infographize")
        .map(|dirs| dirs.config_dir().to_path_buf());
    if system_dir.is_none() {
        debug!("Could not determine platform-specific config directory");
    }

    match find_config(explicit_path, Path::new("."), system_dir.as_deref())? {
        Some(path) => load_config_file(path),
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

/// Resolve which configuration file applies, if any.
///
/// `local_root` is the directory holding the local `infographize/`
/// directory; `system_dir` is the platform config directory.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if an explicit path does not exist.
fn find_config(
    explicit_path: Option<impl AsRef<Path>>,
    local_root: &Path,
    system_dir: Option<&Path>,
) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return Ok(Some(path.to_path_buf()));
    }

    let local_config = local_root.join(LOCAL_CONFIG);
    if local_config.is_file() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return Ok(Some(local_config));
    }

    if let Some(system_config) = system_dir.map(|dir| dir.join("config.toml")) {
        if system_config.is_file() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return Ok(Some(system_config));
        }
        debug!(
            path = system_config.display().to_string();
            "System configuration file not found"
        );
    }

    Ok(None)
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, InfographizeError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}
