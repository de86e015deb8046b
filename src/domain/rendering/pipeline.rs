//! Placeholder substitution for CI pipeline templates.
//!
//! Templates are plain YAML with `{{name}}` markers. Multi-line values are
//! re-indented so every continuation line starts at the marker's column, which
//! keeps values placed under a `|` block scalar well formed.

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

pub const APP_NAME: &str = "app_name";
pub const REPO_URL: &str = "repo_url";
pub const APP_CADDY_FILE: &str = "app_caddy_file";
pub const PROXY_CADDY_FILE: &str = "proxy_caddy_file";

static KONFLUX_TEMPLATE: &str = include_str!("../../assets/pipelines/konflux.yaml");
static MINIKUBE_TEMPLATE: &str = include_str!("../../assets/pipelines/minikube.yaml");

/// Built-in pipeline templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineFlavor {
    /// Pull-request PipelineRun for a Konflux tenant.
    #[default]
    Konflux,
    /// Local e2e PipelineRun for a minikube cluster.
    Minikube,
}

impl PipelineFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineFlavor::Konflux => "konflux",
            PipelineFlavor::Minikube => "minikube",
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            PipelineFlavor::Konflux => KONFLUX_TEMPLATE,
            PipelineFlavor::Minikube => MINIKUBE_TEMPLATE,
        }
    }
}

impl fmt::Display for PipelineFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineFlavor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "konflux" => Ok(PipelineFlavor::Konflux),
            "minikube" => Ok(PipelineFlavor::Minikube),
            other => Err(AppError::InvalidConfig(format!(
                "unknown pipeline flavor '{}' (expected konflux or minikube)",
                other
            ))),
        }
    }
}

/// Substitute `{{name}}` placeholders in `template`.
///
/// Whitespace inside the braces is allowed. Placeholders without a substitution
/// are left untouched.
pub fn render_pipeline(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let (before, candidate) = rest.split_at(start);
        out.push_str(before);

        let Some(end) = candidate.find("}}") else {
            rest = candidate;
            break;
        };
        let name = candidate[2..end].trim();
        let value = substitutions
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value);

        match value {
            Some(value) => {
                let column = current_column(&out);
                push_indented(&mut out, value, column);
            }
            None => out.push_str(&candidate[..end + 2]),
        }
        rest = &candidate[end + 2..];
    }

    out.push_str(rest);
    out
}

fn current_column(out: &str) -> usize {
    let line_start = out.rfind('\n').map(|index| index + 1).unwrap_or(0);
    out[line_start..].chars().count()
}

fn push_indented(out: &mut String, value: &str, column: usize) {
    let indent = " ".repeat(column);
    for (index, line) in value.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&indent);
            }
        }
        out.push_str(line);
    }
}
