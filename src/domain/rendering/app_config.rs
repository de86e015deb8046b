//! Caddy site block for the application file server.

use std::collections::HashSet;

use minijinja::context;
use serde::Serialize;

use super::template_engine::{APP_TEMPLATE, build_template_environment, render_template_by_name};
use crate::domain::{AppError, ModuleDescriptor, PathSet};

#[derive(Debug, Serialize)]
struct RouteContext {
    path: String,
    matcher: String,
}

/// Caddy named-matcher stem for a path: `/settings/my-app` becomes `settings_my_app`.
pub fn matcher_name(path: &str) -> String {
    let stem = path.strip_prefix('/').unwrap_or(path);
    stem.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect()
}

/// One route per distinct served path, each with a matcher stem no other route uses.
///
/// Trailing slashes are dropped before deduplication. `/` itself is left to
/// the index fallback.
fn route_contexts(asset_paths: &PathSet) -> Vec<RouteContext> {
    let served: PathSet = asset_paths
        .iter()
        .map(|path| path.trim_end_matches('/'))
        .filter(|path| !path.is_empty())
        .collect();

    let mut taken = HashSet::new();
    served
        .into_iter()
        .map(|path| {
            let stem = matcher_name(&path);
            let mut matcher = stem.clone();
            let mut suffix = 2;
            while !taken.insert(matcher.clone()) {
                matcher = format!("{stem}_{suffix}");
                suffix += 1;
            }
            RouteContext { path, matcher }
        })
        .collect()
}

/// Render the application server config for the given asset paths.
///
/// Federated modules are served as plain files; standalone apps get the
/// index rewrite on each exact match plus a `try_files` fallback.
pub fn render_app_config(
    asset_paths: &PathSet,
    descriptor: &ModuleDescriptor,
) -> Result<String, AppError> {
    let routes = route_contexts(asset_paths);

    let env = build_template_environment()?;
    let rendered = render_template_by_name(
        &env,
        APP_TEMPLATE,
        &context! {
            port => descriptor.app_port,
            document_root => descriptor.document_root.as_str(),
            federated => descriptor.federated,
            routes => routes,
        },
    )?;
    let rendered = rendered.trim_end().to_string();

    validate_federated_config(&rendered, descriptor.federated)?;
    tracing::debug!(module = %descriptor.name, routes = asset_paths.len(), "rendered app config");
    Ok(rendered)
}

/// Reject SPA fallbacks in a federated module's config.
pub fn validate_federated_config(config: &str, is_federated: bool) -> Result<(), AppError> {
    if !is_federated {
        return Ok(());
    }

    for (index, line) in config.lines().enumerate() {
        let directive = line.trim_start();
        if directive.starts_with("try_files") {
            return Err(AppError::InvariantViolation(format!(
                "federated module config uses try_files on line {}",
                index + 1
            )));
        }
        if directive.starts_with("rewrite") && directive.contains("/index.html") {
            return Err(AppError::InvariantViolation(format!(
                "federated module config rewrites to /index.html on line {}",
                index + 1
            )));
        }
    }
    Ok(())
}
