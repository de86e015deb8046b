//! Caddy config rendering, ConfigMap wrapping and pipeline substitution.

pub mod app_config;
pub mod config_document;
pub mod pipeline;
pub mod proxy_config;
pub mod template_engine;

pub use app_config::{matcher_name, render_app_config, validate_federated_config};
pub use config_document::{APP_DATA_KEY, ConfigDocument, PROXY_DATA_KEY, wrap_as_config_document};
pub use pipeline::{PipelineFlavor, render_pipeline};
pub use proxy_config::render_proxy_config;
