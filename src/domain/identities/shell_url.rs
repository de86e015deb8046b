use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use url::Url;

use crate::domain::AppError;

/// Origin of the external shell ("chrome") environment used as a reverse-proxy upstream.
///
/// Guarantees:
/// - `http` or `https` scheme with a host
/// - No path, query, or fragment (Caddy rejects upstreams with paths)
/// - Rendered without a trailing slash, e.g. `https://stage.foo.redhat.com`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellUrl(String);

impl ShellUrl {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidShellUrl {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("host is required"));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not contain a path, query, or fragment"));
        }

        Ok(Self(url.origin().ascii_serialization()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShellUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShellUrl {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ShellUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ShellUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let url = ShellUrl::new("https://stage.foo.redhat.com/").unwrap();
        assert_eq!(url.as_str(), "https://stage.foo.redhat.com");
    }

    #[test]
    fn keeps_explicit_port() {
        let url = ShellUrl::new("http://localhost:9912").unwrap();
        assert_eq!(url.as_str(), "http://localhost:9912");
    }

    #[test]
    fn rejects_paths() {
        let err = ShellUrl::new("https://stage.foo.redhat.com/apps").unwrap_err();
        assert!(matches!(err, AppError::InvalidShellUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(ShellUrl::new("ftp://stage.foo.redhat.com").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(ShellUrl::new("not a url").is_err());
    }
}
