use std::sync::Arc;
use std::thread;

use vcat_cli::alias::{AliasEntry, AliasKey, Payload};
use vcat_cli::catalog::Catalog;
use vcat_cli::config::GeneratorConfig;
use vcat_cli::core::{Section, VcatError};
use vcat_cli::manifest::CatalogFile;
use vcat_cli::test_utils::{fixtures, init_test_logging};
use vcat_cli::view::{AdvisoryLog, Projection, ViewAccessor};

fn sample_catalog() -> Catalog {
    init_test_logging(None);
    Catalog::build(fixtures::sample_entries(), &GeneratorConfig::default()).unwrap()
}

#[test]
fn test_every_alias_reachable_through_its_accessor_chain() {
    let catalog = sample_catalog();
    let view = catalog.full_view();

    for entry in fixtures::sample_entries() {
        let section = entry.section();
        let tree = catalog.tree(section);
        let chain = tree.accessor_chain(&entry.key);
        let mut dotted = view.section(section).root_path();
        for name in &chain {
            dotted.push('.');
            dotted.push_str(name);
        }

        let accessor = view.resolve(&dotted).unwrap_or_else(|| panic!("{dotted} not reachable"));
        assert_eq!(accessor.payload(), Some(&entry.payload), "{dotted}");
    }
    assert!(view.advisories().is_empty());
}

#[test]
fn test_leaf_and_group_alias_uses_direct_value() {
    let catalog = sample_catalog();
    let key = AliasKey::parse("io.quarkus.quarkus.hibernate.orm").unwrap();

    assert_eq!(
        catalog.libraries().accessor_chain(&key),
        ["io", "quarkus", "quarkus", "hibernate", "orm", "asProvider"]
    );
    assert_eq!(catalog.versions().collisions(), 2);
    assert_eq!(catalog.libraries().collisions(), 2);
    assert_eq!(catalog.bundles().collisions(), 0);
}

#[test]
fn test_custom_direct_value_accessor() {
    let config = GeneratorConfig {
        direct_value_accessor: "self".to_string(),
        ..GeneratorConfig::default()
    };
    let catalog = Catalog::build(fixtures::sample_entries(), &config).unwrap();
    let view = catalog.full_view();

    assert!(view.resolve("libs.io.quarkus.quarkus.hibernate.orm.self").is_some());
    assert!(view.resolve("libs.io.quarkus.quarkus.hibernate.orm.asProvider").is_none());
}

#[test]
fn test_sections_do_not_share_names() {
    let file = CatalogFile::from_toml_str(
        r#"
[versions]
quarkus = "2.13.5.Final"

[libraries]
quarkus = "io.quarkus:quarkus-core"

[plugins]
quarkus = { id = "io.quarkus", version.ref = "quarkus" }
"#,
    )
    .unwrap();
    let catalog = Catalog::build(file.entries().unwrap(), &GeneratorConfig::default()).unwrap();
    let view = catalog.full_view();

    assert!(matches!(view.resolve("libs.quarkus"), Some(ViewAccessor::Value(_))));
    assert!(matches!(view.resolve("libs.versions.quarkus"), Some(ViewAccessor::Value(_))));
    assert!(matches!(view.resolve("libs.plugins.quarkus"), Some(ViewAccessor::Value(_))));
}

#[test]
fn test_duplicate_alias_rejected() {
    let entries = vec![
        AliasEntry::version("quarkus", "2.13.5.Final").unwrap(),
        AliasEntry::version("quarkus", "3.0.0.Final").unwrap(),
    ];
    let err = Catalog::build(entries, &GeneratorConfig::default()).unwrap_err();
    assert!(matches!(err, VcatError::DuplicateAlias { section: Section::Versions, .. }));
}

#[test]
fn test_naming_collision_rejected() {
    let err = fixtures::CatalogFixture::naming_collision()
        .entries()
        .map(|entries| Catalog::build(entries, &GeneratorConfig::default()))
        .unwrap()
        .unwrap_err();
    match err {
        VcatError::NamingCollision {
            section, identifier, ..
        } => {
            assert_eq!(section, Section::Libraries);
            assert_eq!(identifier, "serviceBinding");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_plugins_block_step_navigation_records_each_step() {
    let catalog = sample_catalog();
    let view = catalog.plugins_block_view();

    let root = view.enter(Section::Libraries);
    let io = match root.accessor("io") {
        Some(ViewAccessor::Group(node)) => node,
        other => panic!("unexpected accessor {other:?}"),
    };
    assert!(io.accessor("quarkus").is_some());

    let paths: Vec<_> = view.advisories().into_iter().map(|advisory| advisory.path).collect();
    assert_eq!(paths, ["libs.io", "libs.io.quarkus"]);
}

#[test]
fn test_plugins_block_versions_and_plugins_are_silent() {
    let catalog = sample_catalog();
    let view = catalog.plugins_block_view();

    assert_eq!(view.version_string("quarkus"), Some("2.13.5.Final"));
    assert!(view.resolve("libs.plugins.ben-manes.versions").is_none());
    assert!(view.resolve("libs.plugins.benManes.versions").is_some());
    assert!(view.advisories().is_empty());

    assert!(view.resolve("libs.bundles.quarkus.rest").is_some());
    let advisories = view.advisories();
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].section, Section::Bundles);
    assert_eq!(advisories[0].use_instead, "versions or plugins");
}

#[test]
fn test_shared_log_across_threads() {
    let catalog = Arc::new(sample_catalog());
    let log = AdvisoryLog::new();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let log = log.clone();
            thread::spawn(move || {
                let view = catalog.view_with(Projection::new([Section::Versions, Section::Plugins], log));
                let accessor = view.resolve("libs.io.quarkus.quarkus.agroal").unwrap();
                match accessor.payload() {
                    Some(Payload::Library(coordinate)) => coordinate.module(),
                    other => panic!("unexpected payload {other:?}"),
                }
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "io.quarkus:quarkus-agroal");
    }
    assert_eq!(log.len(), 4);
}
