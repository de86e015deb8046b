//! Route extraction from a `deploy/frontend.yaml` resource template.
//!
//! The template wraps a list of Kubernetes objects; only the first object of kind
//! `Frontend` is read. Navigation-oriented fields (search entries, service tiles,
//! bundle navigation) feed the shell side, asset paths and module routes feed the
//! local application.

use std::path::Path;

use serde::Deserialize;

use super::read_source;
use crate::domain::{AppError, PathSet, RouteClassification};

/// Object kind carrying the frontend description.
pub const FRONTEND_KIND: &str = "Frontend";

/// Paths the shell always serves itself: its own assets, its root and index page.
pub const CHROME_SHELL_ROUTES: [&str; 3] = ["/apps/chrome", "/", "/index.html"];

#[derive(Debug, Default, Deserialize)]
struct ResourceTemplate {
    #[serde(default)]
    objects: Option<Vec<serde_yaml::Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct FrontendObject {
    #[serde(default)]
    metadata: Option<Metadata>,
    #[serde(default)]
    spec: Option<FrontendSpec>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrontendSpec {
    #[serde(default)]
    frontend: Option<FrontendPaths>,
    #[serde(default)]
    module: Option<ModuleSpec>,
    #[serde(default)]
    search_entries: Option<Vec<Link>>,
    #[serde(default)]
    service_tiles: Option<Vec<Link>>,
    #[serde(default)]
    bundle_segments: Option<Vec<BundleSegment>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FrontendPaths {
    #[serde(default)]
    paths: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModuleSpec {
    #[serde(default)]
    manifest_location: Option<String>,
    #[serde(default)]
    modules: Option<Vec<ModuleEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ModuleEntry {
    #[serde(default)]
    routes: Option<Vec<ModuleRoute>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ModuleRoute {
    #[serde(default)]
    pathname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Link {
    #[serde(default)]
    href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleSegment {
    #[serde(default)]
    bundle_id: Option<String>,
    #[serde(default)]
    nav_items: Option<Vec<NavItem>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct NavItem {
    #[serde(default)]
    href: Option<String>,
    #[serde(default)]
    routes: Option<Vec<Link>>,
}

/// The Frontend object of a resource template, reduced to what routing needs.
#[derive(Debug, Clone, Default)]
pub struct FrontendManifest {
    found: bool,
    name: Option<String>,
    spec: FrontendSpec,
}

impl FrontendManifest {
    /// Parse template text. A template without a Frontend object is not an error.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let template: ResourceTemplate = serde_yaml::from_str(content)?;
        let Some(object) = template
            .objects
            .unwrap_or_default()
            .into_iter()
            .find(|object| object.get("kind").and_then(|kind| kind.as_str()) == Some(FRONTEND_KIND))
        else {
            return Ok(Self::default());
        };

        let object: FrontendObject = serde_yaml::from_value(object)?;
        Ok(Self {
            found: true,
            name: object.metadata.and_then(|metadata| metadata.name),
            spec: object.spec.unwrap_or_default(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = read_source(path)?;
        Self::parse(&content).map_err(|err| AppError::malformed(path, err.to_string()))
    }

    /// Whether the template contained a Frontend object at all.
    pub fn has_frontend(&self) -> bool {
        self.found
    }

    pub fn module_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }

    /// Federated modules declare where the host shell fetches their module manifest.
    pub fn is_federated(&self) -> bool {
        self.spec
            .module
            .as_ref()
            .and_then(|module| module.manifest_location.as_deref())
            .is_some_and(|location| !location.trim().is_empty())
    }

    /// Every path the manifest mentions, in extraction order.
    pub fn paths(&self) -> PathSet {
        let mut paths = self.frontend_paths();
        paths.extend(self.module_routes().iter());
        paths.extend(self.navigation_links().iter());
        paths
    }

    /// Module route pathnames mounted at the root of a shell bundle.
    pub fn bundle_mounts(&self) -> PathSet {
        let bundle_ids: Vec<&str> = self
            .bundle_segments()
            .filter_map(|segment| segment.bundle_id.as_deref())
            .map(|id| id.trim().trim_matches('/'))
            .filter(|id| !id.is_empty())
            .collect();
        let frontend_paths = self.frontend_paths();

        self.module_routes()
            .iter()
            .filter(|path| !frontend_paths.contains(path))
            .filter(|path| first_segment(path).is_some_and(|segment| bundle_ids.contains(&segment)))
            .collect()
    }

    pub fn classify(&self) -> RouteClassification {
        let mounts = self.bundle_mounts();

        let mut assets = self.frontend_paths();
        assets.extend(self.module_routes().difference(&mounts).iter());

        let mut navigation = self.navigation_links();
        navigation.extend(mounts.iter());

        RouteClassification::new(assets, navigation)
    }

    /// Bundle mounts not served locally, then the shell's fixed routes.
    ///
    /// Empty when the template has no Frontend object.
    pub fn chrome_routes(&self) -> PathSet {
        if !self.found {
            return PathSet::new();
        }
        let assets = self.classify().assets;
        let mut routes = self.bundle_mounts().difference(&assets);
        routes.extend(CHROME_SHELL_ROUTES);
        routes
    }

    fn frontend_paths(&self) -> PathSet {
        self.spec
            .frontend
            .iter()
            .flat_map(|frontend| frontend.paths.iter().flatten())
            .collect()
    }

    fn module_routes(&self) -> PathSet {
        self.spec
            .module
            .iter()
            .flat_map(|module| module.modules.iter().flatten())
            .flat_map(|entry| entry.routes.iter().flatten())
            .filter_map(|route| route.pathname.as_deref())
            .collect()
    }

    fn bundle_segments(&self) -> impl Iterator<Item = &BundleSegment> {
        self.spec.bundle_segments.iter().flatten()
    }

    /// Search entries, service tiles, then each nav item followed by its sub-routes.
    fn navigation_links(&self) -> PathSet {
        let mut links = PathSet::new();
        links.extend(hrefs(self.spec.search_entries.iter().flatten()));
        links.extend(hrefs(self.spec.service_tiles.iter().flatten()));
        for item in self.bundle_segments().flat_map(|segment| segment.nav_items.iter().flatten()) {
            if let Some(href) = item.href.as_deref() {
                links.insert(href);
            }
            links.extend(hrefs(item.routes.iter().flatten()));
        }
        links
    }
}

fn hrefs<'a>(links: impl Iterator<Item = &'a Link>) -> impl Iterator<Item = &'a str> {
    links.filter_map(|link| link.href.as_deref())
}

fn first_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/').split('/').next().filter(|segment| !segment.is_empty())
}

/// All paths of the manifest's Frontend object; `None` when it has none.
pub fn extract_from_resource_manifest(path: &Path) -> Result<Option<PathSet>, AppError> {
    let paths = FrontendManifest::load(path)?.paths();
    Ok((!paths.is_empty()).then_some(paths))
}

pub fn classify_routes(path: &Path) -> Result<RouteClassification, AppError> {
    Ok(FrontendManifest::load(path)?.classify())
}

pub fn extract_chrome_routes(path: &Path) -> Result<PathSet, AppError> {
    Ok(FrontendManifest::load(path)?.chrome_routes())
}

pub fn detect_federation(path: &Path) -> Result<bool, AppError> {
    Ok(FrontendManifest::load(path)?.is_federated())
}

pub fn extract_module_name(path: &Path) -> Result<Option<String>, AppError> {
    Ok(FrontendManifest::load(path)?.module_name().map(str::to_string))
}
