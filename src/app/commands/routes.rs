//! Report resolved routes without writing anything.

use serde::Serialize;

use crate::app::resolution::{ResolvedRoutes, resolve_routes};
use crate::domain::PlumberConfig;

#[derive(Debug, Clone, Serialize)]
pub struct RoutesReport {
    pub fec_config: String,
    pub frontend_yaml: String,
    pub shell_url: Option<String>,
    #[serde(flatten)]
    pub routes: ResolvedRoutes,
}

impl RoutesReport {
    /// Human-readable summary, one field per line.
    pub fn to_text(&self) -> String {
        let routes = &self.routes;
        let mut lines = vec![
            format!("module: {}", routes.module_name),
            format!("federated: {}", routes.federated),
            format!("shell url: {}", self.shell_url.as_deref().unwrap_or("(none)")),
        ];

        let mut section = |title: String, paths: &[String]| {
            lines.push(title);
            if paths.is_empty() {
                lines.push("  (none)".to_string());
            }
            lines.extend(paths.iter().map(|path| format!("  {}", path)));
        };
        section(
            format!("app paths ({}):", routes.app_paths_source.label()),
            routes.app_paths.as_slice(),
        );
        section(
            format!("asset routes ({}):", routes.asset_routes_source.label()),
            routes.asset_routes.as_slice(),
        );
        section(
            format!(
                "chrome routes ({}):",
                routes.chrome_routes_source.map(|source| source.label()).unwrap_or("none")
            ),
            routes.chrome_routes.as_slice(),
        );
        if let Some(classification) = &routes.classification {
            section(
                "navigation routes (resource manifest):".to_string(),
                classification.navigation.as_slice(),
            );
        }

        lines.join("\n")
    }
}

pub fn execute(app_name: &str, config: &PlumberConfig) -> RoutesReport {
    let shell_url = config.shell.url.as_ref().map(|url| url.as_str().to_string());
    let routes = resolve_routes(&config.sources, app_name, shell_url.is_some());
    RoutesReport {
        fec_config: config.sources.fec_config.display().to_string(),
        frontend_yaml: config.sources.frontend_yaml.display().to_string(),
        shell_url,
        routes,
    }
}
