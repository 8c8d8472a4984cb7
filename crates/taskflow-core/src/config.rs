//! Configuration loaded from an optional TOML file.
//!
//! ```toml
//! store_path = "data/tasks.json"
//! default_priority = "high"
//! log_level = "info"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Priority;

pub const DEFAULT_STORE_FILE: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the JSON snapshot lives.
    pub store_path: PathBuf,

    /// Priority used by `add` when none is given.
    pub default_priority: Priority,

    /// trace / debug / info / warn / error
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            default_priority: Priority::Medium,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_reasonable() {
        let c = Config::default();
        assert_eq!(c.store_path, PathBuf::from("tasks.json"));
        assert_eq!(c.default_priority, Priority::Medium);
        assert_eq!(c.log_level, "warn");
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let c = Config::from_toml_str(r#"default_priority = "alta""#).unwrap();
        assert_eq!(c.default_priority, Priority::High);
        assert_eq!(c.store_path, PathBuf::from("tasks.json"));
    }

    #[test]
    fn full_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskflow.toml");
        fs::write(
            &path,
            r#"
            store_path = "/tmp/my-tasks.json"
            default_priority = "low"
            log_level = "debug"
            "#,
        )
        .unwrap();

        let c = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(c.store_path, PathBuf::from("/tmp/my-tasks.json"));
        assert_eq!(c.default_priority, Priority::Low);
        assert_eq!(c.log_level, "debug");
    }

    #[test]
    fn unknown_priority_is_a_parse_error() {
        let err = Config::from_toml_str(r#"default_priority = "urgent""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
