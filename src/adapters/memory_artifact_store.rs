use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    // Shared so clones handed to a context can be inspected afterwards.
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().ok()?.get(path).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = match self.files.lock() {
            Ok(files) => files.keys().cloned().collect(),
            Err(_) => Vec::new(),
        };
        paths.sort();
        paths
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_artifact(&self, path: &Path, content: &str) -> Result<PathBuf, AppError> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| std::io::Error::other("artifact store lock poisoned"))?;
        files.insert(path.to_path_buf(), content.to_string());
        Ok(path.to_path_buf())
    }
}
