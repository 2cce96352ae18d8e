//! Configuration module for appdock.

use serde::Deserialize;
use std::path::Path;

use crate::{AppdockError, Result};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    2024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding one subdirectory per application.
    #[serde(default = "default_apps_dir")]
    pub apps_dir: String,
    /// Holding area for uploads before they are moved into place.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    /// Reconstruct the directory portion of the `filePath` form field under
    /// the application directory. When enabled, `filePath` becomes a
    /// required upload field.
    #[serde(default)]
    pub preserve_paths: bool,
}

fn default_apps_dir() -> String {
    "data/apps".to_string()
}

fn default_temp_dir() -> String {
    "data/uploads".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            apps_dir: default_apps_dir(),
            temp_dir: default_temp_dir(),
            preserve_paths: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/appdock.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(AppdockError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| AppdockError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `APPDOCK_APPS_DIR`: Override the applications root directory
    pub fn apply_env_overrides(&mut self) {
        if let Ok(apps_dir) = std::env::var("APPDOCK_APPS_DIR") {
            if !apps_dir.is_empty() {
                self.storage.apps_dir = apps_dir;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if either storage directory is empty, or if the
    /// temporary-upload directory and the applications root coincide (a
    /// staged upload must never be servable before it is moved into place).
    pub fn validate(&self) -> Result<()> {
        if self.storage.apps_dir.is_empty() {
            return Err(AppdockError::Validation(
                "storage.apps_dir must not be empty".to_string(),
            ));
        }
        if self.storage.temp_dir.is_empty() {
            return Err(AppdockError::Validation(
                "storage.temp_dir must not be empty".to_string(),
            ));
        }
        if Path::new(&self.storage.apps_dir) == Path::new(&self.storage.temp_dir) {
            return Err(AppdockError::Validation(
                "storage.apps_dir and storage.temp_dir must be distinct directories".to_string(),
            ));
        }
        Ok(())
    }
}
