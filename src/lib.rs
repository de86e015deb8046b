//! plumber: Caddy ConfigMaps and test pipelines for frontend applications.
//!
//! Routes are read from a frontend's resource template (`deploy/frontend.yaml`)
//! or its build config (`fec.config.js`), rendered into an app Caddyfile and a
//! proxy Caddyfile, and published as Kubernetes ConfigMaps or substituted into a
//! Tekton pipeline template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{
    AppError, GenerateOptions, GenerateOutcome, LintOutcome, PipelineFlavor, PipelineOptions,
    PipelineOutcome, PipelineTemplate, PlumberConfig, PublishedArtifact, ResolvedRoutes,
    ResourceName, RouteSource, RoutesReport, ShellUrl, generate, generate_at, load_config,
    pipeline, routes,
};
pub use domain::extraction::{
    classify_routes, detect_federation, extract_chrome_routes, extract_from_build_config,
    extract_from_resource_manifest, extract_module_name,
};
pub use domain::rendering::{
    render_app_config, render_pipeline, render_proxy_config, wrap_as_config_document,
};
pub use domain::{ModuleDescriptor, PathSet, RouteClassification};
