use super::*;
use crate::alias::LibraryCoordinate;
use crate::test_utils::CatalogFixture;
use crate::version::{VersionBinding, VersionSpec};
use tempfile::TempDir;

fn parse(content: &str) -> CatalogFile {
    CatalogFile::from_toml_str(content).unwrap()
}

fn library(entries: &[AliasEntry], alias: &str) -> LibraryCoordinate {
    match entries.iter().find(|entry| entry.key.as_str() == alias).map(|entry| &entry.payload) {
        Some(Payload::Library(coordinate)) => coordinate.clone(),
        other => panic!("no library {alias}: {other:?}"),
    }
}

#[test]
fn test_sample_catalog_loads() {
    let file = parse(crate::test_utils::fixtures::SAMPLE_CATALOG);
    assert_eq!(file.versions.len(), 12);
    assert_eq!(file.libraries.len(), 11);
    assert_eq!(file.bundles.len(), 2);
    assert_eq!(file.plugins.len(), 2);
    assert!(file.metadata.is_some());

    let entries = file.entries().unwrap();
    assert_eq!(entries.len(), file.len());
}

#[test]
fn test_declaration_order_preserved() {
    let file = parse(
        r#"
[versions]
zeta = "1"
alpha = "2"
mid = "3"
"#,
    );
    assert_eq!(file.aliases(Section::Versions), ["zeta", "alpha", "mid"]);
}

#[test]
fn test_library_forms() {
    let file = parse(
        r#"
[versions]
quarkus = "2.13.5.Final"

[libraries]
plain = "io.quarkus:quarkus-arc"
pinned = "io.quarkus:quarkus-core:2.13.5.Final"
module = { module = "io.quarkus:quarkus-agroal", version.ref = "quarkus" }
split = { group = "jakarta.validation", name = "jakarta.validation-api", version = "2.0.2" }
rich = { module = "org.apache.groovy:groovy", version = { strictly = "[3.0, 4.0[", prefer = "3.0.13" } }
"#,
    );
    let entries = file.entries().unwrap();

    assert_eq!(library(&entries, "plain").version, VersionBinding::Unspecified);
    assert_eq!(
        library(&entries, "pinned").version,
        VersionBinding::Declared(VersionSpec::required("2.13.5.Final"))
    );
    assert_eq!(library(&entries, "module").version, VersionBinding::Reference("quarkus".to_string()));

    let split = library(&entries, "split");
    assert_eq!(split.module(), "jakarta.validation:jakarta.validation-api");

    match library(&entries, "rich").version {
        VersionBinding::Declared(spec) => {
            assert_eq!(spec.strictly.as_deref(), Some("[3.0, 4.0["));
            assert_eq!(spec.single_version(), None);
        }
        other => panic!("unexpected binding {other:?}"),
    }
}

#[test]
fn test_plugin_forms() {
    let file = parse(
        r#"
[versions]
quarkus = "2.13.5.Final"

[plugins]
bare = "io.quarkus"
pinned = "com.github.ben-manes.versions:0.44.0"
table = { id = "io.quarkus", version.ref = "quarkus" }
"#,
    );
    let entries = file.entries().unwrap();
    let plugins: Vec<_> = entries
        .iter()
        .filter_map(|entry| match &entry.payload {
            Payload::Plugin(plugin) => Some((entry.key.as_str(), plugin.id.as_str(), plugin.version.clone())),
            _ => None,
        })
        .collect();

    assert_eq!(plugins[0], ("bare", "io.quarkus", VersionBinding::Unspecified));
    assert_eq!(
        plugins[1],
        (
            "pinned",
            "com.github.ben-manes.versions",
            VersionBinding::Declared(VersionSpec::required("0.44.0"))
        )
    );
    assert_eq!(plugins[2].2, VersionBinding::Reference("quarkus".to_string()));
}

#[test]
fn test_undefined_version_reference() {
    let err = CatalogFixture::undefined_reference().entries().unwrap_err();
    match err.downcast_ref::<VcatError>() {
        Some(VcatError::UndefinedVersionReference {
            section,
            alias,
            reference,
        }) => {
            assert_eq!(*section, Section::Libraries);
            assert_eq!(alias, "io.quarkus.quarkus.agroal");
            assert_eq!(reference, "agroal");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_undefined_bundle_member() {
    let file = parse(
        r#"
[libraries]
arc = "io.quarkus:quarkus-arc"

[bundles]
base = ["arc", "core"]
"#,
    );
    let err = file.entries().unwrap_err();
    assert!(matches!(err, VcatError::UndefinedBundleMember { ref member, .. } if member == "core"));
}

#[test]
fn test_module_and_group_are_exclusive() {
    let file = parse(
        r#"
[libraries]
both = { module = "io.quarkus:quarkus-arc", group = "io.quarkus" }
"#,
    );
    assert!(matches!(file.entries().unwrap_err(), VcatError::InvalidCatalogEntry { .. }));

    let file = parse(
        r#"
[libraries]
half = { group = "io.quarkus" }
"#,
    );
    assert!(matches!(file.entries().unwrap_err(), VcatError::InvalidCatalogEntry { .. }));
}

#[test]
fn test_module_with_version_rejected() {
    let file = parse(
        r#"
[libraries]
arc = { module = "io.quarkus:quarkus-arc:2.13.5.Final" }
"#,
    );
    assert!(matches!(file.entries().unwrap_err(), VcatError::InvalidCatalogEntry { .. }));
}

#[test]
fn test_reserved_library_alias() {
    let file = parse(
        r#"
[libraries]
"plugins.quarkus" = "io.quarkus:quarkus-gradle-plugin"
"#,
    );
    assert!(matches!(file.entries().unwrap_err(), VcatError::ReservedAlias { .. }));
}

#[test]
fn test_invalid_alias_key() {
    let file = parse(
        r#"
[versions]
"Quarkus" = "2.13.5.Final"
"#,
    );
    assert!(matches!(file.entries().unwrap_err(), VcatError::InvalidAlias { .. }));
}

#[test]
fn test_unquoted_dotted_key_fails_to_parse() {
    let err = CatalogFile::from_toml_str("[versions]\nio.quarkus = \"2.13.5.Final\"\n").unwrap_err();
    assert!(matches!(err, VcatError::CatalogParseError { .. }));
}

#[test]
fn test_unknown_table_rejected() {
    let err = CatalogFile::from_toml_str("[dependencies]\nfoo = \"1\"\n").unwrap_err();
    assert!(matches!(err, VcatError::CatalogParseError { ref file, .. } if file == CATALOG_FILE_NAME));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = CatalogFile::load(&temp.path().join(CATALOG_FILE_NAME)).unwrap_err();
    assert!(matches!(err.downcast_ref::<VcatError>(), Some(VcatError::CatalogNotFound { .. })));
}

#[test]
fn test_load_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = CatalogFixture::sample().write_to(temp.path()).unwrap();
    let file = CatalogFile::load(&path).unwrap();
    assert_eq!(file.plugins.len(), 2);

    let path = CatalogFixture::invalid_syntax().write_to(temp.path()).unwrap();
    let err = CatalogFile::load(&path).unwrap_err();
    match err.downcast_ref::<VcatError>() {
        Some(VcatError::CatalogParseError { file, .. }) => assert!(file.ends_with(CATALOG_FILE_NAME)),
        other => panic!("unexpected error {other:?}"),
    }
}
