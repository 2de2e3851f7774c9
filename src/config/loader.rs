//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.envschema.toml` in the working directory
//! 4. `~/.config/envschema/config.toml` (global defaults)
//! 5. Built-in defaults

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::dotenv::LoadOptions;
use crate::env::Env;
use crate::schema::{RuleDecl, Schema, SchemaFileError};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    /// Schema rules keyed by variable name.
    pub schema: IndexMap<String, RuleDecl>,
}

/// Env file loading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub env_file: PathBuf,
    pub apply_to_env: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(constants::DEFAULT_ENV_FILE),
            apply_to_env: false,
        }
    }
}

impl LoaderConfig {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            apply_to_env: self.apply_to_env,
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, the local config in `work_dir`, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Compile the configured schema rules.
    pub fn schema(&self) -> Result<Schema, SchemaFileError> {
        Schema::from_decls(&self.schema)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for non-default values).
    ///
    /// Schema rules merge per key; a rule in `other` replaces the whole rule.
    fn merge(&mut self, other: Config) {
        let default_loader = LoaderConfig::default();
        if other.loader.env_file != default_loader.env_file {
            self.loader.env_file = other.loader.env_file;
        }
        if other.loader.apply_to_env {
            self.loader.apply_to_env = true;
        }

        self.schema.extend(other.schema);
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_ENV_FILE) {
            if !val.is_empty() {
                self.loader.env_file = PathBuf::from(val);
            }
        }

        if let Ok(val) = env.var(constants::ENV_APPLY_TO_ENV) {
            match val.to_lowercase().as_str() {
                "false" | "0" | "no" | "off" => self.loader.apply_to_env = false,
                "true" | "1" | "yes" | "on" => self.loader.apply_to_env = true,
                _ => tracing::warn!(
                    var = constants::ENV_APPLY_TO_ENV,
                    value = %val,
                    "ignoring invalid value"
                ),
            }
        }
    }
}
