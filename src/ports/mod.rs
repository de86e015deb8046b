mod artifact_store;
mod yaml_linter;

pub use artifact_store::ArtifactStore;
pub use yaml_linter::{LintOutcome, NoopLinter, YamlLinter};
