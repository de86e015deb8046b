mod harness;

use std::fs;
use std::path::Path;

use harness::{FEC_CONFIG, RBAC_FRONTEND, STAGE_URL};
use plumber::{
    AppError, GenerateOptions, PathSet, PipelineFlavor, PipelineOptions, PipelineTemplate,
    PlumberConfig, ResourceName, RouteSource, ShellUrl, extract_from_build_config,
    extract_from_resource_manifest, generate_at, pipeline, render_proxy_config, routes,
    wrap_as_config_document,
};
use tempfile::TempDir;

fn config_in(dir: &Path) -> PlumberConfig {
    let mut config = PlumberConfig::default();
    config.sources.fec_config = dir.join("fec.config.js");
    config.sources.frontend_yaml = dir.join("deploy/frontend.yaml");
    config.lint.enabled = false;
    config
}

fn options(app_name: &str) -> GenerateOptions {
    GenerateOptions {
        app_name: app_name.to_string(),
        repo_url: "https://github.com/org/repo".to_string(),
        app_configmap_name: ResourceName::new("app-caddy").unwrap(),
        proxy_configmap_name: ResourceName::new("proxy-caddy").unwrap(),
        namespace: Some(ResourceName::new("tenant").unwrap()),
    }
}

#[test]
fn public_api_generate_and_inspect_routes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("deploy")).unwrap();
    fs::write(root.join("deploy/frontend.yaml"), RBAC_FRONTEND).unwrap();

    let mut config = config_in(root);
    config.shell.url = Some(ShellUrl::new(STAGE_URL).unwrap());

    let report = routes("anything", &config);
    assert_eq!(report.routes.module_name, "rbac");
    assert_eq!(report.routes.app_paths_source, RouteSource::Manifest);
    assert_eq!(report.shell_url.as_deref(), Some(STAGE_URL));

    let out = root.join("out");
    let outcome = generate_at(&options("anything"), &config, &out).expect("generate failed");
    assert_eq!(outcome.module_name, "rbac");
    assert!(!outcome.federated);
    assert_eq!(outcome.app_configmap.path, out.join("app-caddy.yaml"));
    assert_eq!(outcome.proxy_configmap.path, out.join("proxy-caddy.yaml"));

    let document: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&outcome.proxy_configmap.path).unwrap()).unwrap();
    assert_eq!(document["metadata"]["namespace"].as_str(), Some("tenant"));
    assert!(document["data"]["routes"].as_str().unwrap().contains("handle /apps/chrome* {"));
}

#[test]
fn public_api_generate_reports_missing_shell_url() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("deploy")).unwrap();
    fs::write(root.join("deploy/frontend.yaml"), RBAC_FRONTEND).unwrap();

    let err = generate_at(&options("rbac"), &config_in(root), root).unwrap_err();
    assert!(matches!(err, AppError::MissingParameter(_)));
    assert!(!root.join("app-caddy.yaml").exists());
}

#[test]
fn public_api_pipeline_writes_absolute_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("fec.config.js"), FEC_CONFIG).unwrap();

    let output = root.join("pipelines/foo.yaml");
    let options = PipelineOptions {
        app_name: "foo".to_string(),
        repo_url: "https://github.com/org/foo".to_string(),
        template: PipelineTemplate::Builtin(PipelineFlavor::Minikube),
        output: Some(output.clone()),
    };

    let outcome = pipeline(&options, &config_in(root)).expect("pipeline failed");
    assert_eq!(outcome.module_name, "foo");
    assert_eq!(outcome.pipeline.path, output);

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("      value: |\n        handle /settings/foo* {\n"));
    assert!(!rendered.contains("{{"));
}

#[test]
fn extractors_read_fixture_sources() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("fec.config.js"), FEC_CONFIG).unwrap();
    fs::write(root.join("frontend.yaml"), RBAC_FRONTEND).unwrap();

    let app_urls = extract_from_build_config(&root.join("fec.config.js")).unwrap().unwrap();
    assert_eq!(app_urls.as_slice(), ["/settings/foo", "/apps/foo"]);

    let manifest_paths = extract_from_resource_manifest(&root.join("frontend.yaml")).unwrap().unwrap();
    assert_eq!(manifest_paths.as_slice()[0], "/apps/rbac");
    assert!(manifest_paths.contains("/iam/user-access/overview"));

    let missing = extract_from_build_config(&root.join("nope.js")).unwrap_err();
    assert!(missing.is_recoverable());
}

#[test]
fn configmap_round_trip_preserves_content() {
    let name = ResourceName::new("proxy-caddy").unwrap();
    let contents = [
        "handle /apps/foo* {\n    reverse_proxy 127.0.0.1:8000\n}",
        "  indented first line\nsecond\n\n\nafter blank lines",
        "\n\n:8000 {\n}\n\n",
        "quotes ' \" and # hashes: colons",
    ];

    for content in contents {
        let document = wrap_as_config_document(&name, content, None, "routes").unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&document).unwrap();
        let expected = content.trim_matches('\n');
        assert_eq!(value["data"]["routes"].as_str(), Some(expected), "document:\n{document}");
    }
}

#[test]
fn proxy_without_chrome_routes_needs_no_shell() {
    let assets: PathSet = ["/apps/foo"].iter().collect();
    let proxy = render_proxy_config(&assets, &PathSet::new(), 8000, None).unwrap();
    assert_eq!(proxy, "handle /apps/foo* {\n    reverse_proxy 127.0.0.1:8000\n}");
}
