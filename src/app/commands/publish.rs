//! Write an artifact, then lint it.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ArtifactStore, LintOutcome, YamlLinter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedArtifact {
    pub path: PathBuf,
    pub lint: LintOutcome,
}

/// Persist `content` at `path` and run the linter on the written file.
///
/// A lint rejection fails the publish; the file stays on disk for inspection.
pub fn publish<S, L>(
    ctx: &AppContext<S, L>,
    path: &Path,
    content: &str,
) -> Result<PublishedArtifact, AppError>
where
    S: ArtifactStore,
    L: YamlLinter,
{
    let written = ctx.store().write_artifact(path, content)?;
    let lint = ctx.linter().lint(&written)?;
    if lint == LintOutcome::Passed {
        tracing::debug!(path = %written.display(), "YAML lint passed");
    }
    Ok(PublishedArtifact { path: written, lint })
}
