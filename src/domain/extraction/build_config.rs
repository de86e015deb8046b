use std::path::Path;

use super::literal::{Literal, LiteralError, parse_key_value};
use super::read_source;
use crate::domain::AppError;
use crate::domain::PathSet;

/// Key holding the application's mount paths in `fec.config.js`.
pub const APP_URL_KEY: &str = "appUrl";

/// Read the `appUrl` paths from a build config file.
///
/// `Ok(None)` when the key is missing or its value is not a plain literal.
pub fn extract_from_build_config(path: &Path) -> Result<Option<PathSet>, AppError> {
    let content = read_source(path)?;
    parse_app_url(&content).map_err(|err| AppError::malformed(path, describe(&content, &err)))
}

/// Parse `appUrl` out of build config text.
pub fn parse_app_url(content: &str) -> Result<Option<PathSet>, BuildConfigError> {
    let value = match parse_key_value(content, APP_URL_KEY) {
        None => return Ok(None),
        Some(Err(LiteralError::NotLiteral { .. })) => return Ok(None),
        Some(Err(err)) => return Err(BuildConfigError::Syntax(err)),
        Some(Ok(value)) => value,
    };

    let paths: PathSet = match value {
        Literal::Str(single) => std::iter::once(single).collect(),
        Literal::Array(items) => {
            let mut paths = PathSet::new();
            for (index, item) in items.into_iter().enumerate() {
                match item {
                    Literal::Str(path) => {
                        paths.insert(path);
                    }
                    other => {
                        return Err(BuildConfigError::NonStringEntry { index, kind: other.kind() });
                    }
                }
            }
            paths
        }
        _ => return Ok(None),
    };

    Ok(if paths.is_empty() { None } else { Some(paths) })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildConfigError {
    Syntax(LiteralError),
    NonStringEntry { index: usize, kind: &'static str },
}

fn describe(content: &str, err: &BuildConfigError) -> String {
    match err {
        BuildConfigError::Syntax(inner) => match inner.offset() {
            Some(offset) => {
                let (line, column) = line_column(content, offset);
                format!("{} in {} value at line {}, column {}", inner, APP_URL_KEY, line, column)
            }
            None => format!("{} in {} value", inner, APP_URL_KEY),
        },
        BuildConfigError::NonStringEntry { index, kind } => {
            format!("{} entry {} is a {}, expected a string", APP_URL_KEY, index, kind)
        }
    }
}

fn line_column(content: &str, char_offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for c in content.chars().take(char_offset) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    const FEC_CONFIG: &str = r#"
const { resolve } = require('path');

module.exports = {
  appUrl: ['/settings/foo', '/apps/foo'],
  debug: true,
  useProxy: true,
  interceptChromeConfig: false,
  sassPrefix: '.foo',
  moduleFederation: {
    exposes: { './RootApp': resolve(__dirname, './src/AppEntry') },
  },
};
"#;

    fn paths(set: Option<PathSet>) -> Vec<String> {
        set.map(PathSet::into_vec).unwrap_or_default()
    }

    #[test]
    fn reads_array_value() {
        let result = parse_app_url(FEC_CONFIG).unwrap();
        assert_eq!(paths(result), ["/settings/foo", "/apps/foo"]);
    }

    #[test]
    fn single_string_becomes_one_entry() {
        let result = parse_app_url("module.exports = { appUrl: \"/apps/solo\" };").unwrap();
        assert_eq!(paths(result), ["/apps/solo"]);
    }

    #[test]
    fn missing_key_is_absent() {
        assert_eq!(parse_app_url("module.exports = { debug: true };").unwrap(), None);
    }

    #[test]
    fn computed_value_is_absent() {
        let source = "const urls = ['/a'];\nmodule.exports = { appUrl: urls };";
        assert_eq!(parse_app_url(source).unwrap(), None);
    }

    #[test]
    fn empty_array_is_absent() {
        assert_eq!(parse_app_url("{ appUrl: [] }").unwrap(), None);
    }

    #[test]
    fn duplicates_are_dropped() {
        let result = parse_app_url("{ appUrl: ['/a', '/b', '/a'] }").unwrap();
        assert_eq!(paths(result), ["/a", "/b"]);
    }

    #[test]
    fn non_string_entry_is_rejected() {
        let err = parse_app_url("{ appUrl: ['/a', 42] }").unwrap_err();
        assert_eq!(err, BuildConfigError::NonStringEntry { index: 1, kind: "number" });
    }

    #[test]
    fn unterminated_array_is_rejected() {
        let err = parse_app_url("module.exports = {\n  appUrl: ['/a', '/b'\n").unwrap_err();
        assert!(matches!(err, BuildConfigError::Syntax(LiteralError::Unterminated { .. })));
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let dir = tempdir().unwrap();
        let err = extract_from_build_config(&dir.path().join("fec.config.js")).unwrap_err();
        assert!(matches!(err, AppError::SourceNotFound { .. }));
    }

    #[test]
    fn malformed_file_reports_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fec.config.js");
        fs::write(&path, "module.exports = {\n  appUrl: ['/a' '/b'],\n};\n").unwrap();

        let err = extract_from_build_config(&path).unwrap_err();
        match err {
            AppError::MalformedSource { details, .. } => {
                assert!(details.contains("line 2"), "details: {details}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fec.config.js");
        fs::write(&path, FEC_CONFIG).unwrap();

        let result = extract_from_build_config(&path).unwrap();
        assert_eq!(paths(result), ["/settings/foo", "/apps/foo"]);
    }
}
