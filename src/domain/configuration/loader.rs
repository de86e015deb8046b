//! Run configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, PlumberConfig};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "plumber.toml";

/// Load the run configuration.
///
/// An explicit path must exist. Without one, `plumber.toml` in `working_dir` is
/// used when present and built-in defaults otherwise.
pub fn load_config(explicit: Option<&Path>, working_dir: &Path) -> Result<PlumberConfig, AppError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
            if !candidate.is_file() {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                return Ok(PlumberConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::SourceNotFound { path: path.clone() },
        _ => AppError::Io(err),
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration file");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<PlumberConfig, AppError> {
    let config: PlumberConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
