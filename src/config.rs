//! Configuration handling for crew
//!
//! Configuration is stored in `.crew/config.toml` (project) and
//! `~/.config/crew/config.toml` (global). Missing files mean defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::domain::{KanbanBoard, LongNamePolicy, Roster, DEFAULT_STATUS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for new boards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    /// Statuses every new board starts with
    pub default_statuses: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_statuses: vec![DEFAULT_STATUS.to_string()],
        }
    }
}

impl BoardConfig {
    /// Builds a board seeded with the configured statuses
    pub fn new_board(&self, name: &str) -> KanbanBoard {
        KanbanBoard::with_statuses(name, self.default_statuses.iter().map(String::as_str))
    }
}

/// Settings for name parsing
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NameConfig {
    /// Handling of names with four or more parts
    pub long_name_policy: LongNamePolicy,
}

impl NameConfig {
    pub fn new_roster(&self) -> Roster {
        Roster::with_policy(self.long_name_policy)
    }
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProjectConfig {
    pub board: BoardConfig,
    pub names: NameConfig,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project_root = Self::find_project_root();
        let project = match &project_root {
            Some(root) => Self::load_project_config(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "crew", "crew-cli").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_path = match Self::global_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok(GlobalConfig::default()),
        };

        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads project configuration from a specific root
    fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(".crew").join("config.toml");

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")
    }

    /// Finds the project root by looking for a `.crew/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        Self::find_project_root_from(&std::env::current_dir().ok()?)
    }

    /// Finds the project root starting from `start` and walking up
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(".crew").is_dir())
            .map(Path::to_path_buf)
    }

    /// Returns true if we're in a crew project
    pub fn is_in_project(&self) -> bool {
        self.project_root.is_some()
    }
}
