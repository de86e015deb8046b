//! Route resolution across the available sources.
//!
//! Each route kind has an ordered list of resolvers. The first one that yields
//! paths wins and later ones are never run. Source failures are logged and
//! treated as "no answer".

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::extraction::{FrontendManifest, extract_from_build_config};
use crate::domain::{AppError, PathSet, RouteClassification, SourcesConfig};

/// Route served by the shell when nothing more specific is known.
pub const DEFAULT_CHROME_ROUTE: &str = "/apps/chrome";

/// Where a set of routes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteSource {
    /// `deploy/frontend.yaml`.
    Manifest,
    /// `appUrl` in `fec.config.js`.
    BuildConfig,
    /// Synthesized from the application name.
    AppName,
    /// Reused from the resolved application paths.
    AppPaths,
    /// Fixed shell route, used when a shell URL is configured.
    ShellDefault,
}

impl RouteSource {
    pub fn label(&self) -> &'static str {
        match self {
            RouteSource::Manifest => "resource manifest",
            RouteSource::BuildConfig => "build config",
            RouteSource::AppName => "application name",
            RouteSource::AppPaths => "application paths",
            RouteSource::ShellDefault => "shell default",
        }
    }
}

/// Everything routing decided for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRoutes {
    /// Manifest `metadata.name` when present, the requested name otherwise.
    pub module_name: String,
    pub federated: bool,
    pub app_paths: PathSet,
    pub app_paths_source: RouteSource,
    pub asset_routes: PathSet,
    pub asset_routes_source: RouteSource,
    pub chrome_routes: PathSet,
    pub chrome_routes_source: Option<RouteSource>,
    /// Manifest classification, when the manifest could be read.
    pub classification: Option<RouteClassification>,
}

struct Sources<'a> {
    config: &'a SourcesConfig,
    manifest: Option<FrontendManifest>,
    module_name: String,
    shell_configured: bool,
    app_paths: PathSet,
}

type Resolver = (RouteSource, fn(&Sources<'_>) -> Option<PathSet>);

const APP_PATH_RESOLVERS: &[Resolver] = &[
    (RouteSource::Manifest, manifest_paths),
    (RouteSource::BuildConfig, build_config_paths),
    (RouteSource::AppName, app_name_path),
];

const ASSET_ROUTE_RESOLVERS: &[Resolver] = &[
    (RouteSource::Manifest, manifest_assets),
    (RouteSource::AppPaths, resolved_app_paths),
];

const CHROME_ROUTE_RESOLVERS: &[Resolver] = &[
    (RouteSource::Manifest, manifest_chrome_routes),
    (RouteSource::ShellDefault, shell_default_routes),
];

fn non_empty(paths: PathSet) -> Option<PathSet> {
    (!paths.is_empty()).then_some(paths)
}

fn manifest_paths(sources: &Sources<'_>) -> Option<PathSet> {
    sources.manifest.as_ref().map(FrontendManifest::paths).and_then(non_empty)
}

fn build_config_paths(sources: &Sources<'_>) -> Option<PathSet> {
    let path = &sources.config.fec_config;
    match extract_from_build_config(path) {
        Ok(Some(paths)) => Some(paths),
        Ok(None) => {
            info!(path = %path.display(), "no literal appUrl in build config");
            None
        }
        Err(err) => {
            log_source_error("build config", &err);
            None
        }
    }
}

fn app_name_path(sources: &Sources<'_>) -> Option<PathSet> {
    Some(std::iter::once(format!("/{}", sources.module_name)).collect())
}

fn manifest_assets(sources: &Sources<'_>) -> Option<PathSet> {
    sources.manifest.as_ref().map(|manifest| manifest.classify().assets).and_then(non_empty)
}

fn resolved_app_paths(sources: &Sources<'_>) -> Option<PathSet> {
    non_empty(sources.app_paths.clone())
}

fn manifest_chrome_routes(sources: &Sources<'_>) -> Option<PathSet> {
    sources.manifest.as_ref().map(FrontendManifest::chrome_routes).and_then(non_empty)
}

fn shell_default_routes(sources: &Sources<'_>) -> Option<PathSet> {
    sources.shell_configured.then(|| std::iter::once(DEFAULT_CHROME_ROUTE).collect())
}

fn resolve_first(
    kind: &str,
    resolvers: &[Resolver],
    sources: &Sources<'_>,
) -> Option<(RouteSource, PathSet)> {
    let resolved = resolvers
        .iter()
        .find_map(|(source, resolve)| resolve(sources).map(|paths| (*source, paths)));
    match &resolved {
        Some((source, paths)) => {
            info!("{} from {}: {}", kind, source.label(), paths.as_slice().join(", "))
        }
        None => info!("no {} resolved", kind),
    }
    resolved
}

fn log_source_error(label: &str, err: &AppError) {
    match err {
        AppError::SourceNotFound { .. } => info!("{} unavailable: {}", label, err),
        _ => warn!("{} ignored: {}", label, err),
    }
}

fn load_manifest(config: &SourcesConfig) -> Option<FrontendManifest> {
    match FrontendManifest::load(&config.frontend_yaml) {
        Ok(manifest) => Some(manifest),
        Err(err) => {
            log_source_error("resource manifest", &err);
            None
        }
    }
}

/// Resolve module identity and every route set for `app_name`.
///
/// The resource manifest is read once; the build config is only read when the
/// manifest yields no paths.
pub fn resolve_routes(
    config: &SourcesConfig,
    app_name: &str,
    shell_configured: bool,
) -> ResolvedRoutes {
    let manifest = load_manifest(config);

    let module_name = match manifest.as_ref().and_then(FrontendManifest::module_name) {
        Some(name) => {
            if name != app_name {
                info!("using module name '{}' from manifest instead of '{}'", name, app_name);
            }
            name.to_string()
        }
        None => app_name.to_string(),
    };
    let federated = manifest.as_ref().is_some_and(FrontendManifest::is_federated);
    let classification = manifest.as_ref().filter(|m| m.has_frontend()).map(FrontendManifest::classify);

    let mut sources =
        Sources { config, manifest, module_name, shell_configured, app_paths: PathSet::new() };

    let (app_paths_source, app_paths) = resolve_first("app paths", APP_PATH_RESOLVERS, &sources)
        .unwrap_or_else(|| (RouteSource::AppName, PathSet::new()));
    sources.app_paths = app_paths;

    let (asset_routes_source, asset_routes) =
        resolve_first("asset routes", ASSET_ROUTE_RESOLVERS, &sources)
            .unwrap_or_else(|| (RouteSource::AppPaths, PathSet::new()));

    let (chrome_routes_source, chrome_routes) =
        match resolve_first("chrome routes", CHROME_ROUTE_RESOLVERS, &sources) {
            Some((source, routes)) => (Some(source), routes),
            None => (None, PathSet::new()),
        };

    ResolvedRoutes {
        module_name: sources.module_name,
        federated,
        app_paths: sources.app_paths,
        app_paths_source,
        asset_routes,
        asset_routes_source,
        chrome_routes,
        chrome_routes_source,
        classification,
    }
}
