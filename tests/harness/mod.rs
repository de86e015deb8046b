#![allow(dead_code, unused_imports)]

pub(crate) mod test_context;
pub(crate) mod yaml_lint;

pub(crate) use test_context::TestContext;
pub(crate) use yaml_lint::assert_yaml_lint_clean;

/// Stage environment used by tests that proxy chrome routes.
pub(crate) const STAGE_URL: &str = "https://stage.foo.redhat.com";

/// Resource template with navigation links and a bundle mount.
pub(crate) const RBAC_FRONTEND: &str = include_str!("../fixtures/rbac-frontend.yaml");

/// Resource template of a federated module.
pub(crate) const FEDERATED_FRONTEND: &str = include_str!("../fixtures/federated-frontend.yaml");

/// Build config declaring two application URLs.
pub(crate) const FEC_CONFIG: &str = include_str!("../fixtures/fec.config.js");
