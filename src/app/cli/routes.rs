use std::path::Path;
use std::str::FromStr;

use clap::Args;

use super::{ServerArgs, SourceArgs, load_run_config};
use crate::app::api::{self, RoutesReport};
use crate::domain::AppError;

/// Fallback when no name is given and the working directory has none.
const FALLBACK_APP_NAME: &str = "app";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(AppError::InvalidConfig(format!(
                "unknown output format '{}' (expected text, json or yaml)",
                other
            ))),
        }
    }
}

#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// Application name [default: current directory name]
    #[arg(long, value_name = "NAME")]
    app_name: Option<String>,
    /// Output format (text, json, yaml)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: OutputFormat,
    #[command(flatten)]
    sources: SourceArgs,
    #[command(flatten)]
    server: ServerArgs,
}

pub(super) fn run_routes(args: RoutesArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let config = load_run_config(config_path, args.sources, args.server, true)?;
    let app_name = match args.app_name {
        Some(name) => name,
        None => default_app_name()?,
    };

    let report = api::routes(&app_name, &config);
    println!("{}", format_report(&report, args.format)?);
    Ok(())
}

fn default_app_name() -> Result<String, AppError> {
    let cwd = std::env::current_dir()?;
    Ok(cwd
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_APP_NAME)
        .to_string())
}

fn format_report(report: &RoutesReport, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(report.to_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|err| AppError::Serialization(err.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(report)
            .map(|yaml| yaml.trim_end().to_string())
            .map_err(|err| AppError::Serialization(err.to_string())),
    }
}
