//! Version catalog file loader
//!
//! Reads a `libs.versions.toml` style catalog into ordered [`AliasEntry`]
//! lists. Declaration order is kept, so accessors are listed in the order the
//! author wrote them.
//!
//! # File Format
//!
//! ```toml
//! [versions]
//! "io.quarkus.quarkus.agroal" = "2.13.5.Final"
//! groovy = { strictly = "[3.0, 4.0[", prefer = "3.0.13" }
//!
//! [libraries]
//! "io.quarkus.quarkus.arc" = "io.quarkus:quarkus-arc"
//! "io.quarkus.quarkus.core" = "io.quarkus:quarkus-core:2.13.5.Final"
//! "io.quarkus.quarkus.agroal" = { module = "io.quarkus:quarkus-agroal", version.ref = "io.quarkus.quarkus.agroal" }
//! "groovy.core" = { group = "org.apache.groovy", name = "groovy", version = { prefer = "3.0.13" } }
//!
//! [bundles]
//! "quarkus.base" = ["io.quarkus.quarkus.arc", "io.quarkus.quarkus.core"]
//!
//! [plugins]
//! quarkus = { id = "io.quarkus", version = "2.13.5.Final" }
//! "ben-manes.versions" = "com.github.ben-manes.versions:0.44.0"
//! ```
//!
//! Dotted aliases are quoted keys. An unquoted `a.b = ...` is a nested TOML
//! table, which matches no declaration shape and fails to parse.
//!
//! A `[metadata]` table is accepted and ignored; any other top-level table is
//! an error.
//!
//! # Validation
//!
//! [`CatalogFile::entries`] checks alias syntax, that every `version.ref`
//! names a declared version and that every bundle member names a declared
//! library.

mod decl;

#[cfg(test)]
mod manifest_tests;

pub use decl::{LibraryDecl, LibraryTable, PluginDecl, PluginTable, VersionDecl, VersionField, VersionRef};

use crate::alias::{AliasEntry, Payload};
use crate::core::{Result as CoreResult, Section, VcatError};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Conventional catalog file name.
pub const CATALOG_FILE_NAME: &str = "libs.versions.toml";

/// A parsed catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Free-form metadata, ignored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<toml::Table>,

    /// `[versions]`
    #[serde(default)]
    pub versions: IndexMap<String, VersionDecl>,

    /// `[libraries]`
    #[serde(default)]
    pub libraries: IndexMap<String, LibraryDecl>,

    /// `[bundles]`
    #[serde(default)]
    pub bundles: IndexMap<String, Vec<String>>,

    /// `[plugins]`
    #[serde(default)]
    pub plugins: IndexMap<String, PluginDecl>,
}

impl CatalogFile {
    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// - [`VcatError::CatalogNotFound`] if `path` does not exist
    /// - [`VcatError::CatalogParseError`] for TOML syntax or shape errors
    /// - I/O errors, with the path as context
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VcatError::CatalogNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let catalog = Self::parse(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            versions = catalog.versions.len(),
            libraries = catalog.libraries.len(),
            bundles = catalog.bundles.len(),
            plugins = catalog.plugins.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// Parse catalog TOML.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::CatalogParseError`] for TOML syntax or shape errors.
    pub fn from_toml_str(content: &str) -> CoreResult<Self> {
        Self::parse(content, CATALOG_FILE_NAME)
    }

    fn parse(content: &str, file: &str) -> CoreResult<Self> {
        toml::from_str(content).map_err(|e| VcatError::CatalogParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Total number of declared aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len() + self.libraries.len() + self.bundles.len() + self.plugins.len()
    }

    /// True when no alias is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert every declaration into a validated [`AliasEntry`].
    ///
    /// Entries come out section by section (versions, libraries, bundles,
    /// plugins), each in declaration order.
    ///
    /// # Errors
    ///
    /// - [`VcatError::InvalidAlias`] / [`VcatError::ReservedAlias`] for bad keys
    /// - [`VcatError::InvalidCatalogEntry`] for malformed values
    /// - [`VcatError::UndefinedVersionReference`] for a dangling `version.ref`
    /// - [`VcatError::UndefinedBundleMember`] for a dangling bundle member
    pub fn entries(&self) -> CoreResult<Vec<AliasEntry>> {
        let mut entries = Vec::with_capacity(self.len());

        for (alias, decl) in &self.versions {
            entries.push(AliasEntry::new(alias, Payload::Version(decl.clone().into_spec()))?);
        }
        for (alias, decl) in &self.libraries {
            entries.push(decl::library_entry(alias, decl.clone())?);
        }
        for (alias, members) in &self.bundles {
            if let Some(member) = members.iter().find(|member| !self.libraries.contains_key(*member)) {
                return Err(VcatError::UndefinedBundleMember {
                    bundle: alias.clone(),
                    member: member.clone(),
                });
            }
            entries.push(AliasEntry::bundle(alias, members.iter().cloned())?);
        }
        for (alias, decl) in &self.plugins {
            entries.push(decl::plugin_entry(alias, decl.clone())?);
        }

        self.check_version_references(&entries)?;
        Ok(entries)
    }

    fn check_version_references(&self, entries: &[AliasEntry]) -> CoreResult<()> {
        for entry in entries {
            let reference = match &entry.payload {
                Payload::Library(coordinate) => coordinate.version.reference(),
                Payload::Plugin(plugin) => plugin.version.reference(),
                Payload::Version(_) | Payload::Bundle(_) => None,
            };
            if let Some(reference) = reference
                && !self.versions.contains_key(reference)
            {
                return Err(VcatError::UndefinedVersionReference {
                    section: entry.section(),
                    alias: entry.key.to_string(),
                    reference: reference.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Declared aliases of one section, in declaration order.
    #[must_use]
    pub fn aliases(&self, section: Section) -> Vec<&str> {
        match section {
            Section::Versions => self.versions.keys().map(String::as_str).collect(),
            Section::Libraries => self.libraries.keys().map(String::as_str).collect(),
            Section::Bundles => self.bundles.keys().map(String::as_str).collect(),
            Section::Plugins => self.plugins.keys().map(String::as_str).collect(),
        }
    }
}
