use crate::ports::{ArtifactStore, YamlLinter};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: ArtifactStore, L: YamlLinter> {
    store: S,
    linter: L,
}

impl<S: ArtifactStore, L: YamlLinter> AppContext<S, L> {
    /// Create a new application context.
    pub fn new(store: S, linter: L) -> Self {
        Self { store, linter }
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the YAML linter.
    pub fn linter(&self) -> &L {
        &self.linter
    }
}
