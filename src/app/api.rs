//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{FilesystemArtifactStore, YamllintCommand};
use crate::app::{
    AppContext,
    commands::{generate, pipeline, routes},
};
use crate::domain::LintConfig;
use crate::ports::{NoopLinter, YamlLinter};

pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::pipeline::{PipelineOptions, PipelineOutcome, PipelineTemplate};
pub use crate::app::commands::publish::PublishedArtifact;
pub use crate::app::commands::routes::RoutesReport;
pub use crate::app::resolution::{ResolvedRoutes, RouteSource};
pub use crate::domain::configuration::load_config;
pub use crate::domain::rendering::PipelineFlavor;
pub use crate::domain::{AppError, PlumberConfig, ResourceName, ShellUrl};
pub use crate::ports::LintOutcome;

fn create_linter(lint: &LintConfig) -> Box<dyn YamlLinter> {
    if lint.enabled {
        Box::new(YamllintCommand::new(lint.command.clone()))
    } else {
        Box::new(NoopLinter)
    }
}

/// Create an `AppContext` writing below `root`.
fn create_context(
    root: PathBuf,
    lint: &LintConfig,
) -> AppContext<FilesystemArtifactStore, Box<dyn YamlLinter>> {
    AppContext::new(FilesystemArtifactStore::new(root), create_linter(lint))
}

fn absolute(path: &Path) -> Result<PathBuf, AppError> {
    if path.is_absolute() { Ok(path.to_path_buf()) } else { Ok(std::env::current_dir()?.join(path)) }
}

/// Generate both ConfigMaps into the current directory.
pub fn generate(
    options: &GenerateOptions,
    config: &PlumberConfig,
) -> Result<GenerateOutcome, AppError> {
    generate_at(options, config, std::env::current_dir()?)
}

/// Generate both ConfigMaps into `output_dir`.
pub fn generate_at(
    options: &GenerateOptions,
    config: &PlumberConfig,
    output_dir: impl AsRef<Path>,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(absolute(output_dir.as_ref())?, &config.lint);
    generate::execute(&ctx, options, config)
}

/// Render a pipeline; relative output paths resolve against the current directory.
pub fn pipeline(
    options: &PipelineOptions,
    config: &PlumberConfig,
) -> Result<PipelineOutcome, AppError> {
    let ctx = create_context(std::env::current_dir()?, &config.lint);
    pipeline::execute(&ctx, options, config)
}

/// Resolve routes without writing anything.
pub fn routes(app_name: &str, config: &PlumberConfig) -> RoutesReport {
    routes::execute(app_name, config)
}
