//! Configuration handling for the form app

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log file name inside the data directory
const LOG_FILE_NAME: &str = "spidr-form.log";

/// User configuration, every key optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Page path used when none is passed on the command line
    pub default_route: Option<String>,
    /// Tracing directive used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "spidr", "spidr-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Path of the log file, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Route to open: the explicit argument wins over the configured default
    pub fn route<'a>(&'a self, arg: Option<&'a str>) -> &'a str {
        arg.or(self.default_route.as_deref())
            .unwrap_or(crate::route::DEFAULT_ROUTE)
    }
}
