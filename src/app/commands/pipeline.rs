//! Render a CI pipeline with both Caddy configs substituted in.

use std::fs;
use std::io;
use std::path::PathBuf;

use super::publish::{PublishedArtifact, publish};
use super::render::render_caddy_configs;
use crate::app::AppContext;
use crate::domain::rendering::PipelineFlavor;
use crate::domain::rendering::pipeline::{
    APP_CADDY_FILE, APP_NAME, PROXY_CADDY_FILE, REPO_URL, render_pipeline,
};
use crate::domain::{AppError, PlumberConfig};
use crate::ports::{ArtifactStore, YamlLinter};

/// Where the pipeline template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineTemplate {
    Builtin(PipelineFlavor),
    File(PathBuf),
}

impl Default for PipelineTemplate {
    fn default() -> Self {
        PipelineTemplate::Builtin(PipelineFlavor::default())
    }
}

impl PipelineTemplate {
    fn load(&self) -> Result<String, AppError> {
        match self {
            PipelineTemplate::Builtin(flavor) => Ok(flavor.template().to_string()),
            PipelineTemplate::File(path) => fs::read_to_string(path).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::SourceNotFound { path: path.clone() }
                } else {
                    AppError::Io(err)
                }
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub app_name: String,
    pub repo_url: String,
    pub template: PipelineTemplate,
    /// Defaults to `<temp dir>/<module>-pipeline.yaml`.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub module_name: String,
    pub pipeline: PublishedArtifact,
}

pub fn default_output_path(module_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{}-pipeline.yaml", module_name))
}

pub fn execute<S, L>(
    ctx: &AppContext<S, L>,
    options: &PipelineOptions,
    config: &PlumberConfig,
) -> Result<PipelineOutcome, AppError>
where
    S: ArtifactStore,
    L: YamlLinter,
{
    let template = options.template.load()?;
    let rendered = render_caddy_configs(&options.app_name, config)?;
    let module_name = rendered.routes.module_name.clone();

    let content = render_pipeline(
        &template,
        &[
            (APP_NAME, module_name.as_str()),
            (REPO_URL, options.repo_url.as_str()),
            (APP_CADDY_FILE, rendered.app_config.as_str()),
            (PROXY_CADDY_FILE, rendered.proxy_config.as_str()),
        ],
    );

    let output = options.output.clone().unwrap_or_else(|| default_output_path(&module_name));
    let pipeline = publish(ctx, &output, &content)?;

    Ok(PipelineOutcome { module_name, pipeline })
}
