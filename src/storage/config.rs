//! Configuration handling for make-weeks
//!
//! Course settings live in `schedule.toml` in the working directory (or the
//! file passed with `--config`). User-wide defaults live in
//! `~/.config/make-weeks/config.toml` (platform equivalent elsewhere).

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::DocumentSettings;
use crate::domain::date::parse_date;

/// Name of the per-course configuration file
pub const COURSE_CONFIG_FILE: &str = "schedule.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-course configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    /// Dates without class every run (`M/D/YYYY`), merged with `--no-class`
    pub no_class: Vec<String>,

    /// Texts placed into generated documents
    pub document: DocumentSettings,
}

impl CourseConfig {
    /// Parses the configured no-class dates
    pub fn no_class_dates(&self) -> Result<BTreeSet<NaiveDate>, ConfigError> {
        self.no_class
            .iter()
            .map(|s| parse_date(s).map_err(|e| ConfigError::Invalid(format!("no_class: {}", e))))
            .collect()
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + course)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub course: CourseConfig,
    pub global: GlobalConfig,
    /// File the course configuration was read from, if any
    pub course_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration, using `explicit` as the course file when given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let global = Self::load_global()?;

        let course_path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::Invalid(format!(
                        "config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                Some(path.to_path_buf())
            }
            None => {
                let local = PathBuf::from(COURSE_CONFIG_FILE);
                local.is_file().then_some(local)
            }
        };

        let course = match &course_path {
            Some(path) => Self::load_course_config(path)?,
            None => CourseConfig::default(),
        };

        Ok(Self {
            course,
            global,
            course_path,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "make-weeks", "make-weeks")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads course configuration from a file
    pub fn load_course_config(path: &Path) -> Result<CourseConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read course config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse course config: {}", path.display()))
    }
}
