//! Run configuration domain models.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::routes::{DEFAULT_APP_PORT, DEFAULT_DOCUMENT_ROOT};
use crate::domain::{AppError, ShellUrl};

/// Configuration loaded from `plumber.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlumberConfig {
    /// Input document locations.
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Application file server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// External shell environment.
    #[serde(default)]
    pub shell: ShellConfig,
    /// YAML lint step.
    #[serde(default)]
    pub lint: LintConfig,
}

impl PlumberConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.server.validate()?;
        self.lint.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    /// JavaScript build config holding `appUrl`.
    #[serde(default = "default_fec_config")]
    pub fec_config: PathBuf,
    /// Resource template holding the Frontend object.
    #[serde(default = "default_frontend_yaml")]
    pub frontend_yaml: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self { fec_config: default_fec_config(), frontend_yaml: default_frontend_yaml() }
    }
}

fn default_fec_config() -> PathBuf {
    PathBuf::from("fec.config.js")
}

fn default_frontend_yaml() -> PathBuf {
    PathBuf::from("deploy/frontend.yaml")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_app_port")]
    pub app_port: u16,
    #[serde(default = "default_document_root")]
    pub document_root: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { app_port: default_app_port(), document_root: default_document_root() }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.app_port == 0 {
            return Err(AppError::InvalidConfig("app_port must be greater than 0".to_string()));
        }
        if !self.document_root.starts_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "document_root must be an absolute path, got '{}'",
                self.document_root
            )));
        }
        if self.document_root.chars().any(char::is_whitespace) {
            return Err(AppError::InvalidConfig(
                "document_root must not contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_app_port() -> u16 {
    DEFAULT_APP_PORT
}

fn default_document_root() -> String {
    DEFAULT_DOCUMENT_ROOT.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Origin chrome routes are proxied to.
    #[serde(default)]
    pub url: Option<ShellUrl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Linter executable, invoked as `<command> -d relaxed <file>`.
    #[serde(default = "default_lint_command")]
    pub command: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { enabled: default_true(), command: default_lint_command() }
    }
}

impl LintConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.command.trim().is_empty() {
            return Err(AppError::InvalidConfig("lint.command must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_lint_command() -> String {
    "yamllint".to_string()
}
