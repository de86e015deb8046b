//! CLI Adapter.

mod generate;
mod pipeline;
mod routes;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::app::api;
use crate::app::logging::{LOG_LEVEL_ENV, LoggingConfig, init_logging, parse_level};
use crate::domain::{AppError, PlumberConfig, ShellUrl};

#[derive(Parser)]
#[command(name = "plumber")]
#[command(version)]
#[command(
    about = "Generate Caddy ConfigMaps and test pipelines for frontend applications",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = LOG_LEVEL_ENV, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Run configuration file [default: ./plumber.toml when present]
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the app and proxy Caddy ConfigMaps
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
    /// Render a test pipeline with both Caddy configs embedded
    #[clap(visible_alias = "p")]
    Pipeline(pipeline::PipelineArgs),
    /// Show resolved routes and where they came from
    #[clap(visible_alias = "r")]
    Routes(routes::RoutesArgs),
}

/// Source document overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Path to the JavaScript build config [default: fec.config.js]
    #[arg(long, value_name = "FILE")]
    fec_config: Option<PathBuf>,
    /// Path to the resource template [default: deploy/frontend.yaml]
    #[arg(long, value_name = "FILE")]
    frontend_yaml: Option<PathBuf>,
}

/// Rendering overrides shared by every subcommand.
#[derive(Args, Debug, Default)]
struct ServerArgs {
    /// Port the application file server listens on [default: 8000]
    #[arg(long, value_name = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    app_port: Option<u16>,
    /// Stage environment chrome routes are proxied to
    #[arg(long, env = "HCC_ENV_URL", value_name = "URL")]
    stage_env_url: Option<ShellUrl>,
}

/// Load the run configuration and apply command-line overrides on top.
fn load_run_config(
    config_path: Option<&Path>,
    sources: SourceArgs,
    server: ServerArgs,
    no_lint: bool,
) -> Result<PlumberConfig, AppError> {
    let mut config = api::load_config(config_path, &std::env::current_dir()?)?;

    if let Some(path) = sources.fec_config {
        config.sources.fec_config = path;
    }
    if let Some(path) = sources.frontend_yaml {
        config.sources.frontend_yaml = path;
    }
    if let Some(port) = server.app_port {
        config.server.app_port = port;
    }
    if let Some(url) = server.stage_env_url {
        config.shell.url = Some(url);
    }
    if no_lint {
        config.lint.enabled = false;
    }

    config.validate()?;
    Ok(config)
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    init_logging(LoggingConfig::from_flags(cli.verbose, cli.quiet, cli.log_level.as_deref()));
    if let Some(level) = cli.log_level.as_deref()
        && parse_level(level).is_none()
    {
        tracing::warn!("unknown log level '{}', using info", level);
    }

    let config_path = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args, config_path),
        Commands::Pipeline(args) => pipeline::run_pipeline(args, config_path),
        Commands::Routes(args) => routes::run_routes(args, config_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
