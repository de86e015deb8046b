use std::path::{Path, PathBuf};

use clap::Args;

use super::generate::print_artifact;
use super::{ServerArgs, SourceArgs, load_run_config};
use crate::app::api::{self, PipelineFlavor, PipelineOptions, PipelineTemplate};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct PipelineArgs {
    /// Application name, used when the resource template has none
    app_name: String,
    /// Git URL of the application repository
    repo_url: String,
    /// Built-in pipeline template (konflux, minikube)
    #[arg(long, value_name = "FLAVOR", conflicts_with = "template")]
    flavor: Option<PipelineFlavor>,
    /// Pipeline template file with {{ placeholders }}
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,
    /// Output file [default: <temp dir>/<module>-pipeline.yaml]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Skip YAML linting of the written file
    #[arg(long)]
    no_lint: bool,
    #[command(flatten)]
    sources: SourceArgs,
    #[command(flatten)]
    server: ServerArgs,
}

pub(super) fn run_pipeline(args: PipelineArgs, config_path: Option<&Path>) -> Result<(), AppError> {
    let config = load_run_config(config_path, args.sources, args.server, args.no_lint)?;
    let template = match (args.template, args.flavor) {
        (Some(path), _) => PipelineTemplate::File(path),
        (None, Some(flavor)) => PipelineTemplate::Builtin(flavor),
        (None, None) => PipelineTemplate::default(),
    };
    let options = PipelineOptions {
        app_name: args.app_name,
        repo_url: args.repo_url,
        template,
        output: args.output,
    };

    let outcome = api::pipeline(&options, &config)?;

    print_artifact("pipeline", &outcome.pipeline);
    Ok(())
}
