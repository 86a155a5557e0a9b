use predicates::prelude::*;
use tempfile::TempDir;
use vcat_cli::test_utils::CatalogFixture;
use vcat_cli::test_utils::fixtures::SAMPLE_CATALOG;

use crate::common::TestProject;

fn sample_project() -> (TestProject, String) {
    let project = TestProject::new().unwrap();
    let path = project.write_catalog(SAMPLE_CATALOG).unwrap();
    (project, path.to_string_lossy().to_string())
}

#[test]
fn test_check_sample_catalog() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["check", &catalog]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("✓")
        .assert_stdout_contains("libraries")
        .assert_stdout_contains("27 aliases, 4 leaf/group collisions resolved");
}

#[test]
fn test_check_json_output() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["check", &catalog, "--format", "json"]).unwrap();
    output.assert_success();

    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["catalog_name"], "libs");
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert!(
        sections
            .iter()
            .any(|section| section["section"] == "libraries" && section["aliases"] == 11)
    );
}

#[test]
fn test_check_invalid_format() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["check", &catalog, "--format", "yaml"]).unwrap();
    output.assert_failure().assert_stderr_contains("Invalid format 'yaml'");
}

#[test]
fn test_check_missing_catalog() {
    let project = TestProject::new().unwrap();
    let catalog = project.catalog_path().to_string_lossy().to_string();

    let output = project.run_vcat(&["check", &catalog]).unwrap();
    output.assert_failure().assert_stderr_contains("Catalog file not found");
}

#[test]
fn test_check_naming_collision() {
    let project = TestProject::new().unwrap();
    let catalog = CatalogFixture::naming_collision().write_to(&project.project_path().join("gradle")).unwrap();
    let catalog = catalog.to_string_lossy().to_string();

    let output = project.run_vcat(&["check", &catalog]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Naming collision")
        .assert_stderr_contains("serviceBinding");
}

#[test]
fn test_check_undefined_reference() {
    let project = TestProject::new().unwrap();
    project.write_catalog(&CatalogFixture::undefined_reference().content).unwrap();
    let catalog = project.catalog_path().to_string_lossy().to_string();

    let output = project.run_vcat(&["check", &catalog]).unwrap();
    output.assert_failure().assert_stderr_contains("undefined version 'agroal'");
}

#[test]
fn test_check_invalid_syntax() {
    let project = TestProject::new().unwrap();
    project.write_catalog(&CatalogFixture::invalid_syntax().content).unwrap();
    let catalog = project.catalog_path().to_string_lossy().to_string();

    let output = project.run_vcat(&["check", &catalog]).unwrap();
    output.assert_failure().assert_stderr_contains("Invalid catalog file syntax");
}

#[test]
fn test_tree_shows_direct_value_accessor() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["tree", &catalog, "--section", "libraries"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("libs")
        .assert_stdout_contains("└── io")
        .assert_stdout_contains("asProvider")
        .assert_stdout_contains("deployment");
    assert!(!output.stdout.contains("(restricted)"));
}

#[test]
fn test_tree_plugins_block_marks_restricted() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["tree", &catalog, "--plugins-block"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("libs.versions")
        .assert_stdout_contains("libs.plugins")
        .assert_stdout_contains("(restricted)");
    assert!(!output.stderr.contains("warning:"));
}

#[test]
fn test_tree_json_output() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["tree", &catalog, "-s", "versions", "-f", "json"]).unwrap();
    output.assert_success();

    let json: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let versions = &json["sections"][0];
    assert_eq!(versions["section"], "versions");
    assert_eq!(versions["path"], "libs.versions");
    assert_eq!(versions["aliases"], 12);
    assert_eq!(versions["accessors"][0]["name"], "quarkus");
    assert_eq!(versions["accessors"][0]["kind"], "value");
}

#[test]
fn test_tree_unknown_section() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["tree", &catalog, "--section", "dependencies"]).unwrap();
    output.assert_failure().assert_stderr_contains("dependencies");
}

#[test]
fn test_get_version() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["get", &catalog, "libs.versions.quarkus"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("2.13.5.Final")
        .assert_stdout_contains("version:");
}

#[test]
fn test_get_rich_version_has_no_single_version() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["get", &catalog, "libs.versions.groovy"]).unwrap();
    output.assert_success().assert_stdout_contains("(no single version)");
}

#[test]
fn test_get_group_value_through_direct_accessor() {
    let (project, catalog) = sample_project();

    let output = project
        .run_vcat(&["get", &catalog, "libs.io.quarkus.quarkus.hibernate.orm.asProvider"])
        .unwrap();
    output.assert_success().assert_stdout_contains("io.quarkus:quarkus-hibernate-orm");

    let output = project.run_vcat(&["get", &catalog, "libs.io.quarkus.quarkus.hibernate.orm"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("(group)")
        .assert_stdout_contains("asProvider")
        .assert_stdout_contains("deployment");
}

#[test]
fn test_get_plugins_block_warns_on_libraries() {
    let (project, catalog) = sample_project();

    let output = project
        .run_vcat(&["get", &catalog, "libs.io.quarkus.quarkus.agroal", "--plugins-block"])
        .unwrap();
    output
        .assert_success()
        .assert_stdout_contains("io.quarkus:quarkus-agroal")
        .assert_stderr_contains("warning:")
        .assert_stderr_contains("Accessing libraries from version catalogs in this context");
}

#[test]
fn test_get_plugins_block_allows_versions() {
    let (project, catalog) = sample_project();

    let output = project
        .run_vcat(&["get", &catalog, "libs.plugins.quarkus", "--plugins-block"])
        .unwrap();
    output.assert_success().assert_stdout_contains("io.quarkus");
    assert!(!output.stderr.contains("warning:"));
}

#[test]
fn test_get_unknown_path_suggests() {
    let (project, catalog) = sample_project();

    let output = project.run_vcat(&["get", &catalog, "libs.version.quarkus"]).unwrap();
    output
        .assert_failure()
        .assert_stderr_contains("Unknown accessor 'libs.version.quarkus'")
        .assert_stderr_contains("Did you mean: libs.versions.quarkus");
}

#[test]
fn test_get_with_custom_config() {
    let (project, catalog) = sample_project();
    let config = project.write_config("catalog-name = \"deps\"\n").unwrap();
    let config = config.to_string_lossy().to_string();

    let output = project
        .run_vcat(&["--config", &config, "get", &catalog, "deps.versions.quarkus"])
        .unwrap();
    output.assert_success().assert_stdout_contains("2.13.5.Final");
}

#[test]
fn test_invalid_config_rejected() {
    let (project, catalog) = sample_project();
    let config = project.write_config("direct-value-accessor = \"as-provider\"\n").unwrap();
    let config = config.to_string_lossy().to_string();

    let output = project.run_vcat(&["--config", &config, "check", &catalog]).unwrap();
    output.assert_failure().assert_stderr_contains("Configuration error");
}

#[test]
fn test_version_flag() {
    assert_cmd::Command::cargo_bin("vcat")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vcat"));
}

#[test]
fn test_get_from_fixture_file() {
    let temp = TempDir::new().unwrap();
    let catalog = CatalogFixture::sample().write_to(temp.path()).unwrap();

    assert_cmd::Command::cargo_bin("vcat")
        .unwrap()
        .env("NO_COLOR", "1")
        .env("HOME", temp.path())
        .env_remove("VCAT_CONFIG")
        .arg("get")
        .arg(&catalog)
        .arg("libs.bundles.quarkus.rest")
        .assert()
        .success()
        .stdout(predicate::str::contains("io.quarkus.quarkus.resteasy, io.quarkus.quarkus.resteasy.jackson"))
        .stderr(predicate::str::contains("warning:").not());
}
