//! Shared testing harness for `plumber` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{FEC_CONFIG, FEDERATED_FRONTEND, RBAC_FRONTEND};

/// Environment variables that would leak host settings into a run.
const ISOLATED_ENV: [&str; 3] = ["HCC_ENV_URL", "PLUMBER_LOG_LEVEL", "RUST_LOG"];

/// Testing harness providing an isolated application checkout for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty checkout.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Checkout containing the rbac resource template.
    pub(crate) fn with_rbac_manifest() -> Self {
        let ctx = Self::new();
        ctx.write_file("deploy/frontend.yaml", RBAC_FRONTEND);
        ctx
    }

    /// Checkout containing the federated resource template.
    pub(crate) fn with_federated_manifest() -> Self {
        let ctx = Self::new();
        ctx.write_file("deploy/frontend.yaml", FEDERATED_FRONTEND);
        ctx
    }

    /// Checkout containing only a build config.
    pub(crate) fn with_build_config() -> Self {
        let ctx = Self::new();
        ctx.write_file("fec.config.js", FEC_CONFIG);
        ctx
    }

    /// Path to the checkout used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch directory outside the checkout.
    pub(crate) fn scratch_dir(&self) -> PathBuf {
        let dir = self.root.path().join("scratch");
        fs::create_dir_all(&dir).expect("Failed to create scratch directory");
        dir
    }

    /// Build a command for invoking the compiled `plumber` binary within the checkout.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `plumber` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("plumber").expect("Failed to locate plumber binary");
        cmd.current_dir(dir.as_ref());
        for key in ISOLATED_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    /// `plumber generate` with ConfigMap names set and linting disabled.
    pub(crate) fn generate(&self, app_name: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "generate",
            app_name,
            "https://github.com/org/repo",
            "--app-configmap-name",
            "app-caddy",
            "--proxy-configmap-name",
            "proxy-caddy",
            "--no-lint",
        ]);
        cmd
    }

    /// Write `content` to `relative` inside the checkout, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file inside the checkout.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err))
    }

    /// Parse a written ConfigMap and return its single data entry.
    pub(crate) fn configmap_data(&self, relative: &str, key: &str) -> String {
        let value: serde_yaml::Value =
            serde_yaml::from_str(&self.read_file(relative)).expect("ConfigMap is not valid YAML");
        assert_eq!(value["kind"].as_str(), Some("ConfigMap"));
        value["data"][key]
            .as_str()
            .unwrap_or_else(|| panic!("{} has no data.{}", relative, key))
            .to_string()
    }

    /// Assert that a file exists inside the checkout.
    pub(crate) fn assert_exists(&self, relative: &str) {
        assert!(self.work_dir.join(relative).exists(), "{} should exist", relative);
    }

    /// Assert that a file does not exist inside the checkout.
    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.work_dir.join(relative).exists(), "{} should not exist", relative);
    }
}
