use std::path::{Path, PathBuf};

use clap::Args;

use super::{ServerArgs, SourceArgs, load_run_config};
use crate::app::api::{self, GenerateOptions, PublishedArtifact};
use crate::domain::{AppError, ResourceName};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Application name, used when the resource template has none
    app_name: String,
    /// Git URL of the application repository
    repo_url: String,
    /// Name of the app Caddy ConfigMap
    #[arg(long, value_name = "NAME")]
    app_configmap_name: ResourceName,
    /// Name of the proxy routes ConfigMap
    #[arg(long, value_name = "NAME")]
    proxy_configmap_name: ResourceName,
    /// Namespace set on both ConfigMaps
    #[arg(long, value_name = "NAME")]
    namespace: Option<ResourceName>,
    /// Directory the ConfigMaps are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Skip YAML linting of the written files
    #[arg(long)]
    no_lint: bool,
    #[command(flatten)]
    sources: SourceArgs,
    #[command(flatten)]
    server: ServerArgs,
}

pub(super) fn run_generate(args: GenerateArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let config = load_run_config(config_path, args.sources, args.server, args.no_lint)?;
    let options = GenerateOptions {
        app_name: args.app_name,
        repo_url: args.repo_url,
        app_configmap_name: args.app_configmap_name,
        proxy_configmap_name: args.proxy_configmap_name,
        namespace: args.namespace,
    };

    let outcome = api::generate_at(&options, &config, &args.output_dir)?;

    print_artifact("app Caddy ConfigMap", &outcome.app_configmap);
    print_artifact("proxy Caddy ConfigMap", &outcome.proxy_configmap);
    if outcome.federated {
        println!("  Module '{}' is federated; no index.html rewrite", outcome.module_name);
    }
    Ok(())
}

pub(super) fn print_artifact(label: &str, artifact: &PublishedArtifact) {
    println!("✅ Generated {}: {}", label, artifact.path.display());
}
