//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`]
//! and [`std::env::set_var`]. Tests use [`Env::mock()`] backed by a
//! `HashMap`, so loading a file with `apply_to_env` never leaks into the
//! test process.

use std::collections::HashMap;

use thiserror::Error;

/// Reasons a name/value pair cannot be written to the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("variable name is empty")]
    EmptyName,

    #[error("variable name '{0}' contains '='")]
    NameContainsEquals(String),

    #[error("variable {0} contains a NUL byte")]
    ContainsNul(String),
}

/// Check that `name` and `value` can be stored in the process environment.
pub fn validate_var(name: &str, value: &str) -> Result<(), EnvError> {
    if name.is_empty() {
        return Err(EnvError::EmptyName);
    }
    if name.contains('\0') || value.contains('\0') {
        return Err(EnvError::ContainsNul(name.escape_default().to_string()));
    }
    if name.contains('=') {
        return Err(EnvError::NameContainsEquals(name.to_string()));
    }
    Ok(())
}

/// Environment variable store.
///
/// Wraps lookups and writes so that production code hits `std::env` while
/// tests can supply and inspect a controlled set of values.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from and writes to the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Returns `true` if the variable is present.
    pub fn is_set(&self, name: &str) -> bool {
        self.var(name).is_ok()
    }

    /// Set a variable, overwriting any existing value of the same name.
    ///
    /// Fails without writing when [`validate_var`] rejects the pair.
    /// On the real environment this mutates process-wide state without
    /// synchronisation. Callers must only do so during single-threaded
    /// startup, before any other thread reads or writes the environment.
    pub fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        validate_var(name, value)?;
        match &mut self.overrides {
            Some(map) => {
                map.insert(name.to_string(), value.to_string());
            }
            // SAFETY: precondition documented above; the loader is a
            // startup-time call made before concurrent work begins.
            None => unsafe { std::env::set_var(name, value) },
        }
        Ok(())
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
