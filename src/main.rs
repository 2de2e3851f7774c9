//! envschema — load `.env` files and validate them against a typed schema.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use envschema::bump;
use envschema::config::Config;
use envschema::constants;
use envschema::dotenv;
use envschema::env::Env;
use envschema::output::CheckReport;
use envschema::schema::{self, Schema};

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{BumpArgs, CheckArgs, Cli, Command};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Command::Check(args) => run_check(args),
        Command::Bump(args) => run_bump(args),
        Command::Version => run_version(),
    }
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

/// Load the env file, apply the schema, and print the result.
fn run_check(args: CheckArgs) -> Result<()> {
    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let mut env = Env::real();

    let mut config = Config::load(Some(&work_dir), &env).context("failed to load configuration")?;
    args.apply_to(&mut config);

    let env_file = config.loader.env_file.clone();
    let raw = dotenv::load(&env_file, &config.loader.load_options(), &mut env)
        .with_context(|| format!("failed to load {}", env_file.display()))?;

    let schema = if args.no_schema {
        Schema::new()
    } else if let Some(ref path) = args.schema {
        Schema::load(path).with_context(|| format!("invalid schema file {}", path.display()))?
    } else {
        config.schema().context("invalid schema in configuration")?
    };

    let report = if schema.is_empty() {
        CheckReport::raw(&env_file, &raw)
    } else {
        let validated = schema::apply(&raw, &schema)
            .with_context(|| format!("{} failed validation", env_file.display()))?;
        CheckReport::validated(&env_file, &raw, &schema, validated)
    };

    print!("{}", args.format.render(&report));
    Ok(())
}

/// Bump the version in a manifest file in place.
fn run_bump(args: BumpArgs) -> Result<()> {
    let bumped = bump::bump_file(&args.manifest, args.level.into())?;
    println!("Version bumped to {}", bumped.new);
    Ok(())
}
