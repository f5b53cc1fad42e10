//! Configuration system for Armorsmith.
//!
//! Load search configuration from TOML or YAML files to tune parallelism,
//! per-solve time limits and catalog limits without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use armorsmith_config::SimConfig;
//! use std::time::Duration;
//!
//! let config = SimConfig::from_toml_str(r#"
//!     max_recent_skill_count = 10
//!
//!     [search]
//!     parallelism = 8
//!     solve_seconds_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.search.parallelism, 8);
//! assert_eq!(config.solve_time_limit(), Some(Duration::from_secs(5)));
//! assert_eq!(config.max_equip_skill_count, 5);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use armorsmith_config::SimConfig;
//!
//! let config = SimConfig::load("armorsmith.toml").unwrap_or_default();
//! assert_eq!(config.search.parallelism, 4);
//! ```

use std::path::Path;
use std::time::Duration;

use armorsmith_core::SkillLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SimConfig {
    /// How many recently searched skill names to remember.
    pub max_recent_skill_count: usize,

    /// Max skill contributions on one armor piece.
    pub max_equip_skill_count: usize,

    /// Max skill contributions on one charm or decoration.
    pub max_deco_skill_count: usize,

    /// Search engine configuration.
    pub search: SearchConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_recent_skill_count: 20,
            max_equip_skill_count: 5,
            max_deco_skill_count: 2,
            search: SearchConfig::default(),
        }
    }
}

impl SimConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, contains invalid TOML or
    /// fails [`SimConfig::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.parallelism == 0 {
            return Err(ConfigError::Invalid(
                "search.parallelism must be at least 1".to_string(),
            ));
        }
        if self.search.solve_seconds_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "search.solve_seconds_limit must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the number of feasibility-scan workers.
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.search.parallelism = parallelism;
        self
    }

    /// Sets the wall-clock cap for a single solve.
    pub fn with_solve_seconds_limit(mut self, seconds: u64) -> Self {
        self.search.solve_seconds_limit = Some(seconds);
        self
    }

    pub fn with_max_recent_skill_count(mut self, count: usize) -> Self {
        self.max_recent_skill_count = count;
        self
    }

    /// Returns the per-solve time limit, if configured.
    ///
    /// Convenience method that delegates to `search.solve_time_limit()`.
    pub fn solve_time_limit(&self) -> Option<Duration> {
        self.search.solve_time_limit()
    }

    /// Skill-count caps applied when building a catalog.
    pub fn skill_limits(&self) -> SkillLimits {
        SkillLimits {
            equip: self.max_equip_skill_count,
            deco: self.max_deco_skill_count,
        }
    }
}

/// Search engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchConfig {
    /// Worker threads used by the extra-skill feasibility scan.
    pub parallelism: usize,

    /// Maximum seconds a single solve may take. Unlimited when absent.
    pub solve_seconds_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallelism: 4,
            solve_seconds_limit: None,
        }
    }
}

impl SearchConfig {
    /// Returns the per-solve time limit as a Duration, if any.
    pub fn solve_time_limit(&self) -> Option<Duration> {
        self.solve_seconds_limit.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests;
