//! Route resolution plus rendering of both Caddy configs.

use crate::app::resolution::{ResolvedRoutes, resolve_routes};
use crate::domain::rendering::{render_app_config, render_proxy_config};
use crate::domain::{AppError, ModuleDescriptor, PlumberConfig};

/// Both Caddy configs for one module, with the routing that produced them.
#[derive(Debug, Clone)]
pub struct CaddyConfigs {
    pub routes: ResolvedRoutes,
    pub descriptor: ModuleDescriptor,
    pub app_config: String,
    pub proxy_config: String,
}

pub fn render_caddy_configs(
    app_name: &str,
    config: &PlumberConfig,
) -> Result<CaddyConfigs, AppError> {
    let shell_url = config.shell.url.clone();
    let routes = resolve_routes(&config.sources, app_name, shell_url.is_some());

    if routes.federated {
        tracing::info!(module = %routes.module_name, "federated module, index rewrites disabled");
    }

    let descriptor = ModuleDescriptor::new(routes.module_name.clone())
        .federated(routes.federated)
        .with_port(config.server.app_port)
        .with_document_root(config.server.document_root.clone())
        .with_shell_url(shell_url);

    let app_config = render_app_config(&routes.asset_routes, &descriptor)?;
    let proxy_config = render_proxy_config(
        &routes.asset_routes,
        &routes.chrome_routes,
        descriptor.app_port,
        descriptor.shell_url.as_ref(),
    )?;

    Ok(CaddyConfigs { routes, descriptor, app_config, proxy_config })
}
