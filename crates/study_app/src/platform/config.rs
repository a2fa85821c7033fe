use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use study_core::DEFAULT_MAX_FILE_BYTES;
use study_sim::{SimError, SimulatorSettings};
use thiserror::Error;

use super::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "study_app.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
    #[error(transparent)]
    Settings(#[from] SimError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tick_interval_ms: u64,
    pub max_increment: f64,
    /// Per-file size limit; `None` disables enforcement.
    pub max_file_bytes: Option<u64>,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sim = SimulatorSettings::default();
        Self {
            tick_interval_ms: sim.tick_interval.as_millis() as u64,
            max_increment: sim.max_increment,
            max_file_bytes: Some(DEFAULT_MAX_FILE_BYTES),
            log_destination: LogDestination::default(),
            log_file: PathBuf::from("study_app.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn simulator_settings(&self) -> Result<SimulatorSettings, ConfigError> {
        let settings = SimulatorSettings {
            tick_interval: Duration::from_millis(self.tick_interval_ms),
            max_increment: self.max_increment,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No `study_app.ron` in the working directory.
    Defaults,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Loads the configuration.
///
/// Without an explicit path, a missing `study_app.ron` falls back to defaults.
/// An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            return Ok(LoadedConfig {
                config: AppConfig::default(),
                source: ConfigSource::Defaults,
            });
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    config.simulator_settings()?;
    config.level_filter()?;

    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}

fn parse_config(content: &str) -> Result<AppConfig, ron::error::SpannedError> {
    ron::from_str(content)
}

pub fn to_ron(config: &AppConfig) -> Result<String, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new();
    Ok(ron::ser::to_string_pretty(config, pretty)?)
}
