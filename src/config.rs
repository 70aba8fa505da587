use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CompanionError;
use crate::lint::{GOAL_VERBS, MIN_PROMPT_LENGTH, OUTPUT_FORMAT_TERMS, ROLE_MARKER};

pub const CONFIG_FILE_NAME: &str = "prompt-companion.toml";
pub const APP_DIR_NAME: &str = "prompt-companion";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Tuning knobs for the prompt linter. The defaults reproduce the built-in
/// checklist exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Minimum trimmed prompt length in UTF-16 code units (default: 200)
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Phrase that marks a role statement (default: "you are")
    #[serde(default = "default_role_marker")]
    pub role_marker: String,

    #[serde(default = "default_goal_verbs")]
    pub goal_verbs: Vec<String>,

    #[serde(default = "default_output_format_terms")]
    pub output_format_terms: Vec<String>,
}

impl LintConfig {
    /// Reject settings that would make a check match everything or nothing.
    pub fn validate(&self) -> Result<(), CompanionError> {
        if self.role_marker.trim().is_empty() {
            return Err(CompanionError::InvalidConfig(
                "lint.role_marker is empty".to_string(),
            ));
        }
        if self.goal_verbs.iter().all(|v| v.trim().is_empty()) {
            return Err(CompanionError::InvalidConfig(
                "lint.goal_verbs is empty".to_string(),
            ));
        }
        if self.output_format_terms.iter().all(|t| t.trim().is_empty()) {
            return Err(CompanionError::InvalidConfig(
                "lint.output_format_terms is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            role_marker: default_role_marker(),
            goal_verbs: default_goal_verbs(),
            output_format_terms: default_output_format_terms(),
        }
    }
}

fn default_min_length() -> usize {
    MIN_PROMPT_LENGTH
}

fn default_role_marker() -> String {
    ROLE_MARKER.to_string()
}

fn default_goal_verbs() -> Vec<String> {
    GOAL_VERBS.iter().map(|s| s.to_string()).collect()
}

fn default_output_format_terms() -> Vec<String> {
    OUTPUT_FORMAT_TERMS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Where the last generated prompt is kept
    /// (default: <data_dir>/prompt-companion/last_prompt.txt)
    #[serde(default)]
    pub last_prompt_path: Option<String>,
}

impl StorageConfig {
    pub fn resolve_last_prompt_path(&self) -> PathBuf {
        match &self.last_prompt_path {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME)
                .join("last_prompt.txt"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory holding roles.json, templates.json and examples.json.
    /// The bundled catalogs are used when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // Explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            let config = Self::load_from_path(&config_path)?;
            config.validate()?;
            return Ok(config);
        }

        if Path::new(CONFIG_FILE_NAME).is_file() {
            let config = Self::load_from_path(CONFIG_FILE_NAME)?;
            config.validate()?;
            debug!("Loaded config from ./{}", CONFIG_FILE_NAME);
            return Ok(config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(APP_DIR_NAME).join("config.toml");
            if config_path.is_file() {
                let config = Self::load_from_path(&config_path)?;
                config.validate()?;
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CompanionError> {
        self.lint.validate()
    }
}
