//! Unified Application Configuration
//!
//! One configuration structure for the whole board: where snapshots live,
//! how notifications are buffered and how logs are written.

use crate::bus::DEFAULT_CAPACITY;
use crate::snapshot::{DEFAULT_BUILDERS_KEY, DEFAULT_JOBS_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Store path selecting the in-memory backend
pub const IN_MEMORY_STORE: &str = ":memory:";

/// Unified application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot store configuration
    pub store: StoreConfig,

    /// Notification configuration
    pub notifications: NotificationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and file
    pub fn load() -> Result<Self> {
        let config = match (
            std::env::var("JOBBOARD_CONFIG_PATH").ok(),
            std::env::var("JOBBOARD_CONFIG_YAML").ok(),
        ) {
            (Some(path), None) => Self::from_file(PathBuf::from(path))?,
            (None, Some(yaml)) => Self::from_yaml(&yaml)?,
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidValue(
                    "set only one of JOBBOARD_CONFIG_PATH and JOBBOARD_CONFIG_YAML".to_string(),
                ));
            }
            (None, None) => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path));
        }
        let content = std::fs::read_to_string(&path).map_err(ConfigError::FileRead)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML text; missing sections take their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ConfigError::ParseYaml)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store: StoreConfig::from_env()?,
            notifications: NotificationConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.store.validate()?;
        self.notifications.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

/// Snapshot store configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Redb database file, or `:memory:` for a throwaway store
    pub path: String,

    /// Key holding the job collection
    pub jobs_key: String,

    /// Key holding the builder collection
    pub builders_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "jobboard.redb".to_string(),
            jobs_key: DEFAULT_JOBS_KEY.to_string(),
            builders_key: DEFAULT_BUILDERS_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let path = std::env::var("JOBBOARD_STORE_PATH").unwrap_or(defaults.path);
        let jobs_key = std::env::var("JOBBOARD_JOBS_KEY").unwrap_or(defaults.jobs_key);
        let builders_key = std::env::var("JOBBOARD_BUILDERS_KEY").unwrap_or(defaults.builders_key);

        Ok(Self {
            path,
            jobs_key,
            builders_key,
        })
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_STORE
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "store path must not be empty".to_string(),
            ));
        }
        if self.jobs_key.trim().is_empty() || self.builders_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "collection keys must not be empty".to_string(),
            ));
        }
        if self.jobs_key == self.builders_key {
            return Err(ConfigError::InvalidValue(
                "jobs and builders must be stored under different keys".to_string(),
            ));
        }
        Ok(())
    }
}

/// Notification configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Events buffered per subscriber before the oldest are dropped
    pub capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl NotificationConfig {
    pub fn from_env() -> Result<Self> {
        let capacity = std::env::var("JOBBOARD_NOTIFY_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_CAPACITY.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidValue("JOBBOARD_NOTIFY_CAPACITY".to_string()))?;

        Ok(Self { capacity })
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidValue(
                "notification capacity must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown log format: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive
    pub level: String,

    /// Log format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        let level = std::env::var("JOBBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let format = match std::env::var("JOBBOARD_LOG_FORMAT") {
            Ok(format) => format.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self { level, format })
    }

    pub fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    ParseYaml(serde_yaml::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
