//! Route partitions and module facts shared by extraction and rendering.

use serde::Serialize;

use super::identities::ShellUrl;
use super::path_set::PathSet;

/// Port the application file server listens on unless configured otherwise.
pub const DEFAULT_APP_PORT: u16 = 8000;

/// Directory the built application is served from inside the app container.
pub const DEFAULT_DOCUMENT_ROOT: &str = "/srv/dist";

/// Split of a manifest's routes between the local app and the external shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteClassification {
    /// Paths the local application process serves.
    pub assets: PathSet,
    /// Paths forwarded to the external shell environment.
    pub navigation: PathSet,
}

impl RouteClassification {
    /// Build a classification; paths claimed by both sides stay with `navigation`.
    pub fn new(assets: PathSet, navigation: PathSet) -> Self {
        let assets = assets.difference(&navigation);
        Self { assets, navigation }
    }

    /// Every classified path, assets first.
    pub fn all(&self) -> PathSet {
        self.assets.union(&self.navigation)
    }
}

/// Facts about the module being deployed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    /// Loaded by the host shell instead of serving its own `index.html`.
    pub federated: bool,
    pub app_port: u16,
    pub document_root: String,
    pub shell_url: Option<ShellUrl>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            federated: false,
            app_port: DEFAULT_APP_PORT,
            document_root: DEFAULT_DOCUMENT_ROOT.to_string(),
            shell_url: None,
        }
    }

    pub fn federated(mut self, federated: bool) -> Self {
        self.federated = federated;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.app_port = port;
        self
    }

    pub fn with_document_root(mut self, root: impl Into<String>) -> Self {
        self.document_root = root.into();
        self
    }

    pub fn with_shell_url(mut self, shell_url: Option<ShellUrl>) -> Self {
        self.shell_url = shell_url;
        self
    }
}
