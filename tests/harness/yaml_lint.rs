use std::path::{Path, PathBuf};

use yamllint_rs::{FileProcessor, ProcessingOptions, Severity};

/// Lint `path` with relaxed rules and fail on any error-level issue.
pub(crate) fn assert_yaml_lint_clean(path: &Path) {
    let mut config = yamllint_rs::config::Config::new();
    config.set_rule_enabled("line-length", false);
    config.set_rule_enabled("indentation", false);
    config.set_rule_enabled("document-start", false);
    config.set_rule_enabled("comments", false);
    config.set_rule_enabled("truthy", false);

    let processor = FileProcessor::with_config(ProcessingOptions::default(), config);
    let file: PathBuf = path.to_path_buf();
    let result = processor
        .process_file(&file)
        .unwrap_or_else(|err| panic!("Failed to lint {}: {}", path.display(), err));

    let errors: Vec<String> = result
        .issues
        .iter()
        .filter(|(issue, _)| issue.severity == Severity::Error)
        .map(|(issue, line)| format!("L{}: {} - {}", issue.line, issue.message, line))
        .collect();
    assert!(errors.is_empty(), "yamllint errors in {}:\n{}", path.display(), errors.join("\n"));
}
