use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::impl_validated_name;

/// A validated Kubernetes resource name, used for ConfigMap names and namespaces.
///
/// Guarantees:
/// - Lowercase RFC 1123 subdomain
/// - Safe to use as a file stem for the generated manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl_validated_name!(ResourceName, AppError::InvalidResourceName);

impl From<ResourceName> for String {
    fn from(val: ResourceName) -> Self {
        val.0
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ResourceName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_configmap_name() {
        let name = ResourceName::new("learning-resources-app-caddy").unwrap();
        assert_eq!(name.as_str(), "learning-resources-app-caddy");
        assert_eq!(format!("{}", name), "learning-resources-app-caddy");
    }

    #[test]
    fn rejects_uppercase() {
        let err = ResourceName::new("MyConfig").unwrap_err();
        assert!(matches!(err, AppError::InvalidResourceName(ref n) if n == "MyConfig"));
    }

    #[test]
    fn parses_from_str() {
        let name: ResourceName = "proxy-routes".parse().unwrap();
        assert_eq!(&*name, "proxy-routes");
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_yaml::from_str::<ResourceName>("ok-name").is_ok());
        assert!(serde_yaml::from_str::<ResourceName>("Not_Ok").is_err());
    }
}
