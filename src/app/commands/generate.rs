//! Generate the app and proxy Caddy ConfigMaps.

use std::path::Path;

use super::publish::{PublishedArtifact, publish};
use super::render::render_caddy_configs;
use crate::app::AppContext;
use crate::domain::rendering::{APP_DATA_KEY, ConfigDocument, PROXY_DATA_KEY};
use crate::domain::{AppError, PlumberConfig, ResourceName};
use crate::ports::{ArtifactStore, YamlLinter};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub app_name: String,
    pub repo_url: String,
    pub app_configmap_name: ResourceName,
    pub proxy_configmap_name: ResourceName,
    pub namespace: Option<ResourceName>,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub module_name: String,
    pub federated: bool,
    pub app_configmap: PublishedArtifact,
    pub proxy_configmap: PublishedArtifact,
}

pub fn execute<S, L>(
    ctx: &AppContext<S, L>,
    options: &GenerateOptions,
    config: &PlumberConfig,
) -> Result<GenerateOutcome, AppError>
where
    S: ArtifactStore,
    L: YamlLinter,
{
    tracing::info!(app = %options.app_name, repo = %options.repo_url, "generating ConfigMaps");
    let rendered = render_caddy_configs(&options.app_name, config)?;

    let app_document =
        ConfigDocument::new(options.app_configmap_name.clone(), APP_DATA_KEY, &rendered.app_config)
            .with_namespace(options.namespace.clone());
    let proxy_document = ConfigDocument::new(
        options.proxy_configmap_name.clone(),
        PROXY_DATA_KEY,
        &rendered.proxy_config,
    )
    .with_namespace(options.namespace.clone());

    let app_configmap =
        publish(ctx, Path::new(&app_document.file_name()), &app_document.render()?)?;
    let proxy_configmap =
        publish(ctx, Path::new(&proxy_document.file_name()), &proxy_document.render()?)?;

    Ok(GenerateOutcome {
        module_name: rendered.routes.module_name,
        federated: rendered.routes.federated,
        app_configmap,
        proxy_configmap,
    })
}
