//! Runtime configuration
//!
//! Only the ambient concerns are configurable; the conversion's input and
//! output paths are fixed. Sources, lowest precedence first:
//! - Built-in defaults
//! - The first config file found (`beacon-convert.toml`, `.beacon-convert.toml`,
//!   `<config dir>/beacon-convert/config.toml`)
//! - Environment variables (`LOG_LEVEL`, `LOG_FORMAT`, `LOG_OUTPUT`,
//!   `BEACON_CONVERT_LOG_DIR`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
#[cfg(feature = "basic")]
use std::path::Path;
use std::path::PathBuf;
#[cfg(feature = "basic")]
use tracing::info;
use tracing::warn;

const LOG_FORMATS: &[&str] = &["pretty", "json"];
const LOG_OUTPUTS: &[&str] = &["console", "file", "both"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "ERROR".to_string(),
                format: "pretty".to_string(),
                output: "console".to_string(),
            },
            paths: PathsConfig {
                log_directory: PathBuf::from("logs"),
            },
        }
    }
}

impl Config {
    /// Load configuration from defaults, file and environment, then validate
    pub fn load() -> Result<Self> {
        let mut config = Self::from_first_file()?.unwrap_or_default();

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// The config file `load` reads, if any exists
    pub fn config_file() -> Option<PathBuf> {
        Self::candidate_paths().into_iter().find(|p| p.exists())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("beacon-convert.toml"),
            PathBuf::from(".beacon-convert.toml"),
        ];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("beacon-convert").join("config.toml"));
        }
        paths
    }

    #[cfg(feature = "basic")]
    fn from_first_file() -> Result<Option<Self>> {
        Self::config_file()
            .map(|path| Self::load_from_file(&path))
            .transpose()
    }

    #[cfg(not(feature = "basic"))]
    fn from_first_file() -> Result<Option<Self>> {
        if let Some(path) = Self::config_file() {
            warn!(
                config_file = %path.display(),
                "Config file ignored: built without the `basic` feature"
            );
        }
        Ok(None)
    }

    /// Load configuration from a TOML file
    #[cfg(feature = "basic")]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    #[cfg(feature = "basic")]
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }
        if let Ok(val) = env::var("BEACON_CONVERT_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }
    }

    pub fn writes_log_files(&self) -> bool {
        matches!(self.logging.output.as_str(), "file" | "both")
    }

    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            anyhow::bail!(
                "Log format must be one of {:?}, got {:?}",
                LOG_FORMATS,
                self.logging.format
            );
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            anyhow::bail!(
                "Log output must be one of {:?}, got {:?}",
                LOG_OUTPUTS,
                self.logging.output
            );
        }

        if self.logging.level.trim().is_empty() {
            warn!("Empty log level, falling back to the subscriber default");
        }

        // Only touch the filesystem when logs actually go there
        if self.writes_log_files() && !self.paths.log_directory.exists() {
            fs::create_dir_all(&self.paths.log_directory).with_context(|| {
                format!(
                    "Failed to create log directory: {}",
                    self.paths.log_directory.display()
                )
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "ERROR");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.output, "console");
        assert!(!config.writes_log_files());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.logging.output = "syslog".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_console_logging_creates_no_directory() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.paths.log_directory = temp.path().join("never");

        config.validate().unwrap();
        assert!(!config.paths.log_directory.exists());

        config.logging.output = "file".to_string();
        config.validate().unwrap();
        assert!(config.paths.log_directory.exists());
    }
}
