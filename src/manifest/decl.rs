//! Raw TOML declarations and their conversion to catalog entries.

use crate::alias::{AliasEntry, LibraryCoordinate, Payload, PluginSpec};
use crate::core::{Result, Section, VcatError};
use crate::version::{VersionBinding, VersionSpec};
use serde::{Deserialize, Serialize};

/// A `[versions]` value: `"1.0"` or a rich version table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionDecl {
    /// Plain version string
    Plain(String),
    /// Rich version table
    Rich(VersionSpec),
}

impl VersionDecl {
    pub(crate) fn into_spec(self) -> VersionSpec {
        match self {
            VersionDecl::Plain(version) => VersionSpec::required(version),
            VersionDecl::Rich(spec) => spec,
        }
    }
}

/// The `version` field of a library or plugin table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VersionField {
    /// `version = "1.0"`
    Plain(String),
    /// `version.ref = "alias"`
    Reference(VersionRef),
    /// `version = { strictly = "...", prefer = "..." }`
    Rich(VersionSpec),
}

/// `{ ref = "alias" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionRef {
    /// Referenced version alias
    #[serde(rename = "ref")]
    pub reference: String,
}

impl From<Option<VersionField>> for VersionBinding {
    fn from(field: Option<VersionField>) -> Self {
        match field {
            None => VersionBinding::Unspecified,
            Some(VersionField::Plain(version)) => VersionBinding::Declared(VersionSpec::required(version)),
            Some(VersionField::Reference(VersionRef { reference })) => VersionBinding::Reference(reference),
            Some(VersionField::Rich(spec)) => VersionBinding::Declared(spec),
        }
    }
}

/// A `[libraries]` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LibraryDecl {
    /// `"group:name"` or `"group:name:version"`
    Notation(String),
    /// Table form
    Table(LibraryTable),
}

/// Table form of a library declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryTable {
    /// `group:name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Maven group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Artifact name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionField>,
}

/// A `[plugins]` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginDecl {
    /// `"id"` or `"id:version"`
    Notation(String),
    /// Table form
    Table(PluginTable),
}

/// Table form of a plugin declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginTable {
    /// Plugin id
    pub id: String,
    /// Version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionField>,
}

fn invalid(section: Section, alias: &str, reason: impl Into<String>) -> VcatError {
    VcatError::InvalidCatalogEntry {
        section,
        alias: alias.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn library_entry(alias: &str, decl: LibraryDecl) -> Result<AliasEntry> {
    let coordinate = match decl {
        LibraryDecl::Notation(notation) => return AliasEntry::library(alias, &notation),
        LibraryDecl::Table(table) => {
            let base = match (table.module, table.group, table.name) {
                (Some(module), None, None) => {
                    let coordinate = LibraryCoordinate::from_notation(&module)
                        .ok_or_else(|| invalid(Section::Libraries, alias, format!("module '{module}' is not group:name")))?;
                    if coordinate.version != VersionBinding::Unspecified {
                        return Err(invalid(
                            Section::Libraries,
                            alias,
                            "module must not contain a version; use the version field",
                        ));
                    }
                    coordinate
                }
                (None, Some(group), Some(name)) if !group.is_empty() && !name.is_empty() => {
                    LibraryCoordinate::new(group, name)
                }
                (Some(_), _, _) => {
                    return Err(invalid(Section::Libraries, alias, "module cannot be combined with group or name"));
                }
                _ => return Err(invalid(Section::Libraries, alias, "expected a module or both group and name")),
            };
            base.with_version(table.version.into())
        }
    };
    AliasEntry::new(alias, Payload::Library(coordinate))
}

pub(crate) fn plugin_entry(alias: &str, decl: PluginDecl) -> Result<AliasEntry> {
    let (id, version) = match decl {
        PluginDecl::Notation(notation) => match notation.split_once(':') {
            Some((id, version)) if !version.is_empty() => {
                (id.to_string(), VersionBinding::Declared(VersionSpec::required(version)))
            }
            Some(_) => return Err(invalid(Section::Plugins, alias, "empty version after ':'")),
            None => (notation, VersionBinding::Unspecified),
        },
        PluginDecl::Table(table) => (table.id, table.version.into()),
    };
    if id.is_empty() {
        return Err(invalid(Section::Plugins, alias, "plugin id is empty"));
    }
    AliasEntry::new(
        alias,
        Payload::Plugin(PluginSpec {
            id,
            version,
        }),
    )
}
