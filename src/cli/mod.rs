//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use envschema::constants;

/// Install the `tracing` subscriber that writes diagnostics to stderr.
///
/// `ENVSCHEMA_LOG` takes a standard `EnvFilter` directive; `--verbose`
/// raises the default to `debug`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { constants::DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
