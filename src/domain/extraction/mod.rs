//! Route extraction from build configs and resource manifests.

pub mod build_config;
pub mod literal;
pub mod manifest;

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;

pub use build_config::extract_from_build_config;
pub use manifest::{
    FrontendManifest, classify_routes, detect_federation, extract_chrome_routes,
    extract_from_resource_manifest, extract_module_name,
};

/// Read an input document, distinguishing a missing file from other failures.
pub(crate) fn read_source(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AppError::SourceNotFound { path: path.to_path_buf() },
        io::ErrorKind::InvalidData => AppError::malformed(path, "file is not valid UTF-8"),
        _ => AppError::Io(err),
    })
}
