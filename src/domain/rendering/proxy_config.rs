//! Reverse-proxy route snippets for the frontend proxy.

use minijinja::context;
use serde::Serialize;

use super::template_engine::{PROXY_TEMPLATE, build_template_environment, render_template_by_name};
use crate::domain::{AppError, PathSet, ShellUrl};

/// Loopback host the application container listens on inside the pod.
pub const LOCAL_UPSTREAM_HOST: &str = "127.0.0.1";

#[derive(Debug, Serialize)]
struct ProxyBlock {
    matcher: String,
    upstream: String,
}

fn route_matcher(route: &str) -> String {
    if route == "/" { route.to_string() } else { format!("{}*", route.trim_end_matches('/')) }
}

/// Render proxy routes: asset routes to the local app, chrome routes to the shell.
///
/// The shell URL is substituted literally. It is only required when there is at
/// least one chrome route.
pub fn render_proxy_config(
    asset_routes: &PathSet,
    chrome_routes: &PathSet,
    app_port: u16,
    shell_url: Option<&ShellUrl>,
) -> Result<String, AppError> {
    let shell_routes = chrome_routes.difference(asset_routes);

    let shell_upstream = match (shell_routes.is_empty(), shell_url) {
        (true, _) => None,
        (false, Some(url)) => Some(url.as_str()),
        (false, None) => {
            return Err(AppError::MissingParameter(format!(
                "stage environment URL is required to proxy chrome routes ({})",
                shell_routes.as_slice().join(", ")
            )));
        }
    };

    let local_upstream = format!("{}:{}", LOCAL_UPSTREAM_HOST, app_port);
    let mut blocks: Vec<ProxyBlock> = asset_routes
        .iter()
        .map(|route| ProxyBlock { matcher: route_matcher(route), upstream: local_upstream.clone() })
        .collect();
    if let Some(upstream) = shell_upstream {
        blocks.extend(
            shell_routes
                .iter()
                .map(|route| ProxyBlock { matcher: route_matcher(route), upstream: upstream.to_string() }),
        );
    }

    let env = build_template_environment()?;
    let rendered = render_template_by_name(&env, PROXY_TEMPLATE, &context! { blocks => blocks })?;

    tracing::debug!(
        assets = asset_routes.len(),
        chrome = shell_routes.len(),
        "rendered proxy config"
    );
    Ok(rendered.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> PathSet {
        items.iter().collect()
    }

    fn shell() -> ShellUrl {
        "https://stage.foo.redhat.com".parse().unwrap()
    }

    #[test]
    fn asset_routes_point_at_local_port() {
        let config =
            render_proxy_config(&paths(&["/settings/foo", "/apps/foo"]), &PathSet::new(), 8000, None)
                .unwrap();

        assert_eq!(
            config,
            "handle /settings/foo* {\n    reverse_proxy 127.0.0.1:8000\n}\n\nhandle /apps/foo* {\n    reverse_proxy 127.0.0.1:8000\n}"
        );
    }

    #[test]
    fn chrome_routes_point_at_shell_url() {
        let config = render_proxy_config(
            &paths(&["/apps/rbac"]),
            &paths(&["/iam", "/apps/chrome", "/", "/index.html"]),
            8000,
            Some(&shell()),
        )
        .unwrap();

        assert!(config.contains("handle /apps/rbac* {\n    reverse_proxy 127.0.0.1:8000\n}"));
        assert!(config.contains("handle /iam* {\n    reverse_proxy https://stage.foo.redhat.com\n}"));
        assert!(config.contains("handle /apps/chrome* {"));
        assert!(config.contains("handle / {\n    reverse_proxy https://stage.foo.redhat.com\n}"));
        assert!(config.contains("handle /index.html* {"));
        assert!(!config.contains("{env."));
        assert!(!config.contains("${"));
    }

    #[test]
    fn chrome_routes_already_served_locally_are_skipped() {
        let config = render_proxy_config(
            &paths(&["/apps/foo"]),
            &paths(&["/apps/foo", "/apps/chrome"]),
            3000,
            Some(&shell()),
        )
        .unwrap();

        assert_eq!(config.matches("handle /apps/foo*").count(), 1);
        assert!(config.contains("reverse_proxy 127.0.0.1:3000"));
    }

    #[test]
    fn missing_shell_url_is_rejected_when_chrome_routes_exist() {
        let err = render_proxy_config(&paths(&["/apps/foo"]), &paths(&["/apps/chrome"]), 8000, None)
            .unwrap_err();
        assert!(matches!(err, AppError::MissingParameter(_)));
    }

    #[test]
    fn empty_chrome_routes_never_need_shell_url() {
        assert!(render_proxy_config(&paths(&["/apps/foo"]), &PathSet::new(), 8000, None).is_ok());
        assert_eq!(render_proxy_config(&PathSet::new(), &PathSet::new(), 8000, None).unwrap(), "");
    }
}
