/// Validates a Kubernetes resource name (RFC 1123 subdomain).
///
/// Checks:
/// - Non-empty, at most 253 characters
/// - Characters are lowercase ASCII alphanumeric, '-', or '.'
/// - Starts and ends with an alphanumeric character
/// - No empty or dash-bounded dot-separated labels
pub fn validate_resource_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(validate_label)
}

fn validate_label(label: &str) -> bool {
    let is_alnum = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit();

    match (label.chars().next(), label.chars().last()) {
        (Some(first), Some(last)) if is_alnum(first) && is_alnum(last) => {
            label.len() <= 63 && label.chars().all(|c| is_alnum(c) || c == '-')
        }
        _ => false,
    }
}

#[macro_export]
macro_rules! impl_validated_name {
    ($name:ident, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(name: &str) -> Result<Self, $crate::domain::AppError> {
                if $crate::domain::identities::validation::validate_resource_name(name) {
                    Ok(Self(name.to_string()))
                } else {
                    Err($err_variant(name.to_string()))
                }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::AppError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(validate_resource_name("learning-resources-caddy"));
        assert!(validate_resource_name("hcc-platex-services-tenant"));
        assert!(validate_resource_name("app.v2"));
        assert!(validate_resource_name("a"));
    }

    #[test]
    fn invalid_names() {
        assert!(!validate_resource_name(""));
        assert!(!validate_resource_name("Upper"));
        assert!(!validate_resource_name("-leading"));
        assert!(!validate_resource_name("trailing-"));
        assert!(!validate_resource_name("under_score"));
        assert!(!validate_resource_name("double..dot"));
        assert!(!validate_resource_name("has/slash"));
        assert!(!validate_resource_name(&"a".repeat(254)));
    }

    #[test]
    fn label_length_is_bounded() {
        assert!(validate_resource_name(&"a".repeat(63)));
        assert!(!validate_resource_name(&"a".repeat(64)));
    }
}
