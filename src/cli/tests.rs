//! Argument parsing and configuration tests for the CLI.

use crate::cli::{Cli, CliConfig, Commands};
use clap::Parser;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_cli_parsing() {
    let cli = Cli::try_parse_from(["vcat", "--help"]);
    assert!(cli.is_err());

    let cli = Cli::try_parse_from(["vcat", "check", "libs.versions.toml"]).unwrap();
    assert!(matches!(cli.command, Commands::Check(_)));
}

#[test]
fn test_cli_requires_catalog() {
    assert!(Cli::try_parse_from(["vcat", "tree"]).is_err());
    assert!(Cli::try_parse_from(["vcat", "get", "libs.versions.toml"]).is_err());
}

#[test]
fn test_cli_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["vcat", "tree", "libs.versions.toml", "--verbose"]).unwrap();
    assert!(cli.verbose);

    let cli = Cli::try_parse_from(["vcat", "get", "libs.versions.toml", "libs.x", "-q"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["vcat", "-v", "-q", "check", "libs.versions.toml"]).is_err());
}

#[test]
fn test_build_config_verbose() {
    let cli = Cli::try_parse_from(["vcat", "--verbose", "check", "libs.versions.toml"]).unwrap();
    assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
}

#[test]
fn test_build_config_quiet() {
    let cli = Cli::try_parse_from(["vcat", "--quiet", "check", "libs.versions.toml"]).unwrap();
    assert_eq!(cli.build_config().log_level, None);
}

#[test]
#[serial]
fn test_build_config_default_level() {
    unsafe {
        std::env::remove_var("RUST_LOG");
    }
    let cli = Cli::try_parse_from(["vcat", "check", "libs.versions.toml"]).unwrap();
    assert_eq!(cli.build_config().log_level.as_deref(), Some("warn"));
}

#[test]
fn test_build_config_path() {
    let cli =
        Cli::try_parse_from(["vcat", "--config", "/tmp/vcat.toml", "check", "libs.versions.toml"]).unwrap();
    let config = cli.build_config();
    assert_eq!(config.config_path, Some(PathBuf::from("/tmp/vcat.toml")));
}

#[test]
fn test_cli_config_new_is_silent() {
    let config = CliConfig::new();
    assert!(config.log_level.is_none());
    assert!(config.config_path.is_none());
}

#[test]
#[serial]
fn test_execute_with_missing_config_fails() {
    let temp = TempDir::new().unwrap();
    let catalog = crate::test_utils::CatalogFixture::sample().write_to(temp.path()).unwrap();
    let catalog = catalog.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["vcat", "check", catalog.as_str()]).unwrap();
    let config = CliConfig {
        log_level: None,
        config_path: Some(temp.path().join("missing.toml")),
    };
    let err = cli.execute_with_config(config).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
#[serial]
fn test_execute_with_custom_catalog_name() {
    let temp = TempDir::new().unwrap();
    let catalog = crate::test_utils::CatalogFixture::sample().write_to(temp.path()).unwrap();
    let catalog = catalog.to_string_lossy().to_string();
    let config_path = temp.path().join("vcat.toml");
    std::fs::write(&config_path, "catalog-name = \"deps\"\n").unwrap();

    let cli = Cli::try_parse_from(["vcat", "get", catalog.as_str(), "deps.versions.quarkus"]).unwrap();
    let config = CliConfig {
        log_level: None,
        config_path: Some(config_path.clone()),
    };
    assert!(cli.execute_with_config(config).is_ok());

    let cli = Cli::try_parse_from(["vcat", "get", catalog.as_str(), "libs.versions.quarkus"]).unwrap();
    let config = CliConfig {
        log_level: None,
        config_path: Some(config_path),
    };
    assert!(cli.execute_with_config(config).is_err());
}
