use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, Value};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const APP_TEMPLATE: &str = "app.Caddyfile.j2";
pub const PROXY_TEMPLATE: &str = "proxy.Caddyfile.j2";

/// Environment with every embedded Caddy template registered.
pub fn build_template_environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    // Caddy directives are emitted verbatim.
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for file in TEMPLATES_DIR.files() {
        let name = file.path().to_str().ok_or_else(|| {
            AppError::Template(format!("Embedded template path {:?} is not UTF-8", file.path()))
        })?;
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::Template(format!("Embedded template '{}' is not UTF-8", name))
        })?;
        env.add_template(name, content).map_err(|e| {
            AppError::Template(format!("Failed to register template '{}': {}", name, e))
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| {
        AppError::Template(format!("Failed to load template '{}': {}", template_name, e))
    })?;

    template.render(ctx).map_err(|e| {
        AppError::Template(format!("Failed to render template '{}': {}", template_name, e))
    })
}
