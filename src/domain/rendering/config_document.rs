//! Kubernetes ConfigMap wrapping for rendered configuration text.

use serde_yaml::{Mapping, Value};

use crate::domain::{AppError, ResourceName};

/// Data key of the application server ConfigMap.
pub const APP_DATA_KEY: &str = "Caddyfile";
/// Data key of the proxy routes ConfigMap.
pub const PROXY_DATA_KEY: &str = "routes";

const CONTENT_INDENT: &str = "    ";

/// A ConfigMap holding one block of text under a single data key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    pub name: ResourceName,
    pub namespace: Option<ResourceName>,
    pub data_key: String,
    pub content: String,
}

impl ConfigDocument {
    pub fn new(name: ResourceName, data_key: impl Into<String>, content: &str) -> Self {
        Self {
            name,
            namespace: None,
            data_key: data_key.into(),
            content: strip_blank_edges(content),
        }
    }

    pub fn with_namespace(mut self, namespace: Option<ResourceName>) -> Self {
        self.namespace = namespace;
        self
    }

    /// File name the document is written under.
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.name)
    }

    pub fn render(&self) -> Result<String, AppError> {
        let mut out = String::new();
        out.push_str("apiVersion: v1\n");
        out.push_str("kind: ConfigMap\n");
        out.push_str("metadata:\n");
        out.push_str(&format!("  name: {}\n", self.name));
        if let Some(namespace) = &self.namespace {
            out.push_str(&format!("  namespace: {}\n", namespace));
        }
        out.push_str("data:\n");

        if self.content.is_empty() {
            out.push_str(&format!("  {}: \"\"\n", self.data_key));
            return Ok(out);
        }

        if !fits_literal_block(&self.content) {
            out.push_str(&self.quoted_data()?);
            return Ok(out);
        }

        // An explicit indentation indicator keeps leading whitespace in the content.
        let header = match self.content.chars().next() {
            Some(first) if first.is_whitespace() => "|2-",
            _ => "|-",
        };
        out.push_str(&format!("  {}: {}\n", self.data_key, header));
        for line in self.content.split('\n') {
            if !line.is_empty() {
                out.push_str(CONTENT_INDENT);
                out.push_str(line);
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// The data entry as a serde_yaml-escaped scalar, indented under `data:`.
    fn quoted_data(&self) -> Result<String, AppError> {
        let mut data = Mapping::new();
        data.insert(Value::from(self.data_key.as_str()), Value::from(self.content.as_str()));
        let entry = serde_yaml::to_string(&data)
            .map_err(|err| AppError::Serialization(err.to_string()))?;

        Ok(entry.lines().map(|line| format!("  {line}\n")).collect())
    }
}

/// Whether every character of `content` survives a literal block scalar.
fn fits_literal_block(content: &str) -> bool {
    !content.chars().any(|c| {
        (c.is_control() && c != '\n' && c != '\t')
            || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}' | '\u{fffe}' | '\u{ffff}')
    })
}

/// Wrap `content` as a ConfigMap document under `data.<data_key>`.
pub fn wrap_as_config_document(
    name: &ResourceName,
    content: &str,
    namespace: Option<&ResourceName>,
    data_key: &str,
) -> Result<String, AppError> {
    ConfigDocument::new(name.clone(), data_key, content)
        .with_namespace(namespace.cloned())
        .render()
}

/// Drop whitespace-only lines from both ends of `content`.
pub fn strip_blank_edges(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    lines[first..=last].join("\n")
}
