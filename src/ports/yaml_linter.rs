use std::path::Path;

use crate::domain::AppError;

/// Result of a lint run that did not reject the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    Passed,
    /// The linter did not run.
    Skipped { reason: String },
}

/// Port for validating written YAML files.
///
/// A rejected file is reported as `AppError::LintFailed`.
pub trait YamlLinter {
    fn lint(&self, path: &Path) -> Result<LintOutcome, AppError>;
}

impl<T: YamlLinter + ?Sized> YamlLinter for Box<T> {
    fn lint(&self, path: &Path) -> Result<LintOutcome, AppError> {
        (**self).lint(path)
    }
}

/// Linter used when linting is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLinter;

impl YamlLinter for NoopLinter {
    fn lint(&self, _path: &Path) -> Result<LintOutcome, AppError> {
        Ok(LintOutcome::Skipped { reason: "linting disabled".to_string() })
    }
}
