use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for plumber operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A referenced input document does not exist.
    #[error("Source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// An input document exists but does not match its expected grammar.
    #[error("Malformed source {}: {details}", path.display())]
    MalformedSource { path: PathBuf, details: String },

    /// A required cross-field input is absent.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Generated output would contain a directive forbidden for the current mode.
    #[error("Generated configuration is invalid: {0}")]
    InvariantViolation(String),

    /// The external YAML linter rejected a written artifact.
    #[error("YAML lint failed for {}: {details}", path.display())]
    LintFailed { path: PathBuf, details: String },

    /// Kubernetes resource name is invalid.
    #[error(
        "Invalid resource name '{0}': must be lowercase alphanumeric, '-' or '.', start and end with an alphanumeric character, at most 253 characters"
    )]
    InvalidResourceName(String),

    /// External shell URL is unusable as a reverse-proxy upstream.
    #[error("Invalid shell URL '{url}': {reason}")]
    InvalidShellUrl { url: String, reason: String },

    /// Configuration file content is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Template registration or rendering failed.
    #[error("Template error: {0}")]
    Template(String),

    /// A report could not be serialized for output.
    #[error("Failed to serialize output: {0}")]
    Serialization(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn malformed<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        AppError::MalformedSource { path: path.into(), details: details.into() }
    }

    /// Whether a source resolution chain may swallow this error and try the next source.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::SourceNotFound { .. } | AppError::MalformedSource { .. })
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::SourceNotFound { .. } => io::ErrorKind::NotFound,
            AppError::MalformedSource { .. }
            | AppError::InvalidResourceName(_)
            | AppError::InvalidShellUrl { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::MissingParameter(_) => io::ErrorKind::InvalidInput,
            AppError::InvariantViolation(_) | AppError::LintFailed { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::Template(_) | AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
