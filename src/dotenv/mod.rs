//! `.env` file loading.
//!
//! Reads `KEY=VALUE` lines into a [`RawMapping`]. Writing the parsed pairs
//! into the process environment is opt-in via [`LoadOptions::apply_to_env`].

pub mod parser;

use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use thiserror::Error;

use crate::env::{Env, EnvError};

pub use parser::parse_str;

/// Flat key to string-value mapping produced by one parse.
///
/// Duplicate keys keep the last value seen in the file.
pub type RawMapping = IndexMap<String, String>;

/// Errors while reading or parsing an env file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid format on line {line}: {content}")]
    Format { line: usize, content: String },

    #[error("cannot apply line {line} to the environment: {source}")]
    InvalidEnvVar { line: usize, source: EnvError },

    #[error("failed to read env file {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },
}

/// Options controlling [`load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Also install every parsed pair into the environment, overwriting
    /// existing variables of the same name.
    pub apply_to_env: bool,
}

impl LoadOptions {
    /// Options that write parsed pairs into the environment.
    pub fn applying_to_env() -> Self {
        Self { apply_to_env: true }
    }
}

/// Load an env file from `path`.
///
/// A missing file is not an error: a warning is logged and an empty
/// mapping returned so optional env files can be skipped. When
/// `options.apply_to_env` is set, `env` is only written after the whole
/// file parsed and every pair is valid for the environment.
pub fn load(path: &Path, options: &LoadOptions, env: &mut Env) -> Result<RawMapping, ParseError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "env file not found, skipping load");
            return Ok(RawMapping::new());
        }
        Err(e) => {
            return Err(ParseError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let mapping = parse_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        entries = mapping.len(),
        "parsed env file"
    );

    if options.apply_to_env {
        for (key, value) in &mapping {
            crate::env::validate_var(key, value).map_err(|source| ParseError::InvalidEnvVar {
                line: line_of(&content, key),
                source,
            })?;
        }
        for (key, value) in &mapping {
            env.set_var(key, value).map_err(|source| ParseError::InvalidEnvVar {
                line: line_of(&content, key),
                source,
            })?;
        }
    }

    Ok(mapping)
}

/// 1-based line of the last assignment to `key`, for error reporting.
fn line_of(content: &str, key: &str) -> usize {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            line.split_once('=')
                .is_some_and(|(k, _)| k.trim().trim_start_matches('\u{feff}') == key)
        })
        .map(|(idx, _)| idx + 1)
        .last()
        .unwrap_or(0)
}
