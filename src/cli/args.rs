//! Clap argument types and CLI-to-config overrides.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use envschema::bump::BumpLevel;
use envschema::config::Config;
use envschema::output::CheckReport;

/// Load .env files and validate them against a typed schema.
#[derive(Parser, Debug)]
#[command(name = "envschema", version = envschema::constants::VERSION)]
pub struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load an env file and validate it against the configured schema.
    Check(CheckArgs),

    /// Bump the semantic version in a manifest file.
    Bump(BumpArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Env file to load (default: `.env`, or `loader.env_file` from config).
    #[arg(long, short = 'f')]
    pub env_file: Option<PathBuf>,

    /// Standalone schema TOML file. Replaces any `[schema]` from config.
    #[arg(long, short = 's')]
    pub schema: Option<PathBuf>,

    /// Show the raw parsed values and skip schema validation.
    #[arg(long, default_value_t = false, conflicts_with = "schema")]
    pub no_schema: bool,

    /// Output format.
    #[arg(long, default_value = "terminal")]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Apply CLI overrides on top of the layered config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref path) = self.env_file {
            config.loader.env_file = path.clone();
        }
    }
}

/// Arguments for the `bump` subcommand.
#[derive(Parser, Debug)]
pub struct BumpArgs {
    /// Version component to increment.
    pub level: BumpLevelArg,

    /// Manifest file containing a `version = "X.Y.Z"` line.
    #[arg(long, default_value = envschema::constants::DEFAULT_MANIFEST)]
    pub manifest: PathBuf,
}

/// Clap-facing mirror of [`BumpLevel`].
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum BumpLevelArg {
    Major,
    Minor,
    Patch,
}

impl From<BumpLevelArg> for BumpLevel {
    fn from(arg: BumpLevelArg) -> Self {
        match arg {
            BumpLevelArg::Major => BumpLevel::Major,
            BumpLevelArg::Minor => BumpLevel::Minor,
            BumpLevelArg::Patch => BumpLevel::Patch,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render a report using the renderer for this format.
    pub fn render(&self, report: &CheckReport) -> String {
        use envschema::output::OutputRenderer;
        match self {
            OutputFormat::Terminal => envschema::output::terminal::TerminalRenderer.render(report),
            OutputFormat::Json => envschema::output::json::JsonRenderer.render(report),
        }
    }
}
