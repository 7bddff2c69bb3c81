// =============================================================================
// Runner configuration, loaded from an optional TOML file
// =============================================================================

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for field '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub log: LogConfig,
    pub demos: DemoSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Per-demo knobs. Demos read these when the catalog registers them.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct DemoSettings {
    pub disabled: Vec<String>,
    pub threads: ThreadSettings,
    pub scope_timer: TimerSettings,
    pub fast_io: FastIoSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThreadSettings {
    pub greeting_number: i64,
    pub table_base: u64,
}

impl Default for ThreadSettings {
    fn default() -> Self {
        Self {
            greeting_number: 42,
            table_base: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerSettings {
    pub iterations: usize,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self { iterations: 1000 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FastIoSettings {
    pub lines: usize,
}

impl Default for FastIoSettings {
    fn default() -> Self {
        Self { lines: 100_000 }
    }
}

impl Config {
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Defaults when no path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let demos = &self.demos;
        if let Some(name) = demos.disabled.iter().find(|n| !crate::demos::is_known(n)) {
            return Err(ConfigError::invalid_value(
                "demos.disabled",
                name,
                "no such demo",
            ));
        }
        if demos.threads.table_base == 0 {
            return Err(ConfigError::invalid_value(
                "demos.threads.table_base",
                0,
                "must be at least 1",
            ));
        }
        if demos.scope_timer.iterations == 0 {
            return Err(ConfigError::invalid_value(
                "demos.scope_timer.iterations",
                0,
                "must be at least 1",
            ));
        }
        if demos.fast_io.lines == 0 {
            return Err(ConfigError::invalid_value(
                "demos.fast_io.lines",
                0,
                "must be at least 1",
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "log.filter",
                "\"\"",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
