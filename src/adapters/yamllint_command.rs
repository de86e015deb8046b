use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::{LintOutcome, YamlLinter};

/// Runs the external `yamllint` binary with the relaxed preset.
#[derive(Debug, Clone)]
pub struct YamllintCommand {
    program: String,
}

impl YamllintCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for YamllintCommand {
    fn default() -> Self {
        Self::new("yamllint")
    }
}

impl YamlLinter for YamllintCommand {
    fn lint(&self, path: &Path) -> Result<LintOutcome, AppError> {
        let output = match Command::new(&self.program).args(["-d", "relaxed"]).arg(path).output() {
            Ok(output) => output,
            Err(err) => {
                let reason = if err.kind() == io::ErrorKind::NotFound {
                    format!("'{}' is not installed", self.program)
                } else {
                    format!("failed to run '{}': {}", self.program, err)
                };
                tracing::warn!(path = %path.display(), "skipping YAML lint: {}", reason);
                return Ok(LintOutcome::Skipped { reason });
            }
        };

        if output.status.success() {
            return Ok(LintOutcome::Passed);
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let details = match (stdout.is_empty(), stderr.is_empty()) {
            (true, true) => format!("{} exited with {}", self.program, output.status),
            (false, true) => stdout,
            (true, false) => stderr,
            (false, false) => format!("{}\n{}", stdout, stderr),
        };
        Err(AppError::LintFailed { path: path.to_path_buf(), details })
    }
}
