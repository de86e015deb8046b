use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for persisting generated manifests.
pub trait ArtifactStore {
    /// Write `content` to `path` (relative paths resolve against the store root),
    /// replacing any existing file. Returns the location written.
    fn write_artifact(&self, path: &Path, content: &str) -> Result<PathBuf, AppError>;
}
