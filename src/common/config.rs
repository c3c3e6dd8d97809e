//! Configuration file handling

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::paths::config_path;
use super::{Error, Result};
use crate::adapter::SuiteConfig;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Named suite definitions
    #[serde(default)]
    pub suites: BTreeMap<String, SuiteConfig>,

    /// Default settings
    #[serde(default)]
    pub defaults: Defaults,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default settings
#[derive(Debug, Deserialize, Default)]
pub struct Defaults {
    /// Suite used by a bare `run`
    pub suite: Option<String>,

    /// Fail the run when any assertion failed
    #[serde(default)]
    pub strict: bool,
}

/// Logging settings
#[derive(Debug, Deserialize, Default)]
pub struct LoggingConfig {
    /// Append log events to this file
    pub file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Names of all configured suites, sorted
    pub fn suite_names(&self) -> Vec<&str> {
        self.suites.keys().map(String::as_str).collect()
    }

    /// Get a suite and its name, or the default suite when `name` is `None`
    pub fn get_suite(&self, name: Option<&str>) -> Result<(String, SuiteConfig)> {
        let name = match name.or(self.defaults.suite.as_deref()) {
            Some(name) => name,
            None if self.suites.len() == 1 => {
                // A single configured suite needs no explicit default
                self.suites.keys().next().map(String::as_str).unwrap_or_default()
            }
            None => {
                return Err(Error::Config(
                    "No suite given. Pass a suite name, set [defaults] suite, or use --runner/--script/--fixture"
                        .to_string(),
                ))
            }
        };

        self.suites
            .get(name)
            .map(|suite| (name.to_string(), suite.clone()))
            .ok_or_else(|| Error::suite_not_found(name, &self.suite_names()))
    }
}

/// Resolve a runner path
///
/// A bare program name (no path separator) is looked up on PATH; anything
/// else is used as given.
pub fn resolve_runner(runner: &Path) -> Result<PathBuf> {
    if runner.components().count() == 1 && !runner.exists() {
        return which::which(runner)
            .map_err(|_| Error::RunnerNotFound(runner.display().to_string()));
    }
    Ok(runner.to_path_buf())
}
