//! Sample catalogs for tests
//!
//! [`CatalogFixture`] holds a catalog's TOML text and can write it into a
//! temporary directory for CLI tests. The `sample` catalog is modelled on a
//! Quarkus project and is also shipped as `tests/fixtures/libs.versions.toml`.

use crate::alias::AliasEntry;
use crate::manifest::{CATALOG_FILE_NAME, CatalogFile};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML text of the sample catalog.
pub const SAMPLE_CATALOG: &str = include_str!("../../tests/fixtures/libs.versions.toml");

/// A catalog file to write into a test directory.
#[derive(Clone, Debug)]
pub struct CatalogFixture {
    pub content: String,
    pub name: String,
}

impl CatalogFixture {
    /// The Quarkus sample catalog.
    pub fn sample() -> Self {
        Self {
            name: "sample".to_string(),
            content: SAMPLE_CATALOG.to_string(),
        }
    }

    /// Two libraries whose last segments both normalize to `serviceBinding`.
    pub fn naming_collision() -> Self {
        Self {
            name: "naming_collision".to_string(),
            content: r#"
[libraries]
"io.quarkus.kubernetes.service-binding" = "io.quarkus:quarkus-kubernetes-service-binding"
"io.quarkus.kubernetes.service_binding" = "io.quarkus:quarkus-kubernetes-service-binding-deployment"
"#
            .trim()
            .to_string(),
        }
    }

    /// A library pointing at a version alias that does not exist.
    pub fn undefined_reference() -> Self {
        Self {
            name: "undefined_reference".to_string(),
            content: r#"
[versions]
quarkus = "2.13.5.Final"

[libraries]
"io.quarkus.quarkus.agroal" = { module = "io.quarkus:quarkus-agroal", version.ref = "agroal" }
"#
            .trim()
            .to_string(),
        }
    }

    /// Not TOML.
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: "[libraries\n\"quarkus\" = \"io.quarkus:quarkus-core\"".to_string(),
        }
    }

    /// Write the catalog as `libs.versions.toml` into `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CATALOG_FILE_NAME);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write {} fixture", self.name))?;
        Ok(path)
    }

    /// Parse and validate the catalog.
    pub fn entries(&self) -> Result<Vec<AliasEntry>> {
        let file = CatalogFile::from_toml_str(&self.content)?;
        Ok(file.entries()?)
    }
}

/// Every entry of the sample catalog.
///
/// # Panics
///
/// Panics if the sample catalog does not load, which would be a fixture bug.
pub fn sample_entries() -> Vec<AliasEntry> {
    CatalogFixture::sample().entries().expect("sample catalog is valid")
}
