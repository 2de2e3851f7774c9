//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and build information so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "envschema";

/// Package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.envschema.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".envschema.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "envschema";

/// Env file loaded when nothing else is configured.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Manifest rewritten by `bump` when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Default `tracing` filter for the binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_ENV_FILE: &str = "ENVSCHEMA_ENV_FILE";
pub const ENV_APPLY_TO_ENV: &str = "ENVSCHEMA_APPLY_TO_ENV";
pub const ENV_LOG: &str = "ENVSCHEMA_LOG";
