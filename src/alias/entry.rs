//! Catalog entries and their payloads.

use crate::alias::AliasKey;
use crate::core::{Result, Section, VcatError};
use crate::version::{VersionBinding, VersionSpec};
use serde::Serialize;
use std::fmt;

/// A `group:name` coordinate with its version binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryCoordinate {
    /// Maven group
    pub group: String,
    /// Artifact name
    pub name: String,
    /// Where the version comes from
    pub version: VersionBinding,
}

impl LibraryCoordinate {
    /// Coordinate without a version.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: VersionBinding::Unspecified,
        }
    }

    /// Set the version binding.
    #[must_use]
    pub fn with_version(mut self, version: VersionBinding) -> Self {
        self.version = version;
        self
    }

    /// Parse `group:name` or `group:name:version` notation.
    ///
    /// ```rust
    /// use vcat_cli::alias::LibraryCoordinate;
    ///
    /// let coordinate = LibraryCoordinate::from_notation("io.quarkus:quarkus-agroal:2.13.5.Final").unwrap();
    /// assert_eq!(coordinate.module(), "io.quarkus:quarkus-agroal");
    /// assert!(LibraryCoordinate::from_notation("quarkus-agroal").is_none());
    /// ```
    #[must_use]
    pub fn from_notation(notation: &str) -> Option<Self> {
        let mut parts = notation.split(':');
        let group = parts.next().filter(|s| !s.is_empty())?;
        let name = parts.next().filter(|s| !s.is_empty())?;
        let version = match parts.next() {
            None => VersionBinding::Unspecified,
            Some(v) if !v.is_empty() => VersionBinding::Declared(VersionSpec::required(v)),
            Some(_) => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(group, name).with_version(version))
    }

    /// The `group:name` module identifier.
    #[must_use]
    pub fn module(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }
}

impl fmt::Display for LibraryCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            VersionBinding::Declared(spec) if spec.is_plain() => {
                write!(f, "{}:{}:{}", self.group, self.name, spec)
            }
            _ => write!(f, "{}:{}", self.group, self.name),
        }
    }
}

/// A bundle: an ordered list of library aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleSpec {
    /// Library aliases, in declaration order
    pub members: Vec<String>,
}

/// A plugin id with its version binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginSpec {
    /// Plugin id, e.g. `io.quarkus`
    pub id: String,
    /// Where the version comes from
    pub version: VersionBinding,
}

/// The value an alias stands for.
///
/// Each variant belongs to exactly one [`Section`], so a section tree only
/// ever holds one payload kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Payload {
    /// Library coordinate
    Library(LibraryCoordinate),
    /// Version declaration
    Version(VersionSpec),
    /// Bundle of library aliases
    Bundle(BundleSpec),
    /// Plugin id
    Plugin(PluginSpec),
}

impl Payload {
    /// The section this payload kind lives in.
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Payload::Library(_) => Section::Libraries,
            Payload::Version(_) => Section::Versions,
            Payload::Bundle(_) => Section::Bundles,
            Payload::Plugin(_) => Section::Plugins,
        }
    }

    /// Human description of the accessor exposing this payload.
    ///
    /// `leaf` is the last alias segment, `alias` the full alias.
    #[must_use]
    pub fn describe(&self, leaf: &str, alias: &str) -> String {
        match self {
            Payload::Library(coordinate) => format!(
                "Dependency provider for {leaf} with {} coordinates and {}",
                coordinate.module(),
                coordinate.version
            ),
            Payload::Version(spec) => format!("Version alias {alias} with value {spec}"),
            Payload::Bundle(bundle) => format!(
                "Dependency bundle provider for {leaf} which contains the following dependencies: {}",
                bundle.members.join(", ")
            ),
            Payload::Plugin(plugin) => {
                format!("Plugin provider for {leaf} with plugin id {} and {}", plugin.id, plugin.version)
            }
        }
    }

    /// Single-string form of a version payload; `None` for other kinds and
    /// for rich versions that don't reduce to one version.
    #[must_use]
    pub fn single_version(&self) -> Option<&str> {
        match self {
            Payload::Version(spec) => spec.single_version(),
            _ => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Library(coordinate) => match &coordinate.version {
                VersionBinding::Reference(alias) => write!(f, "{coordinate} (version.ref = {alias})"),
                VersionBinding::Declared(spec) if !spec.is_plain() => write!(f, "{coordinate} {spec}"),
                _ => write!(f, "{coordinate}"),
            },
            Payload::Version(spec) => write!(f, "{spec}"),
            Payload::Bundle(bundle) => write!(f, "[{}]", bundle.members.join(", ")),
            Payload::Plugin(plugin) => match &plugin.version {
                VersionBinding::Unspecified => write!(f, "{}", plugin.id),
                VersionBinding::Reference(alias) => write!(f, "{} (version.ref = {alias})", plugin.id),
                VersionBinding::Declared(spec) => write!(f, "{}:{spec}", plugin.id),
            },
        }
    }
}

/// One declared alias: immutable once loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// The validated alias
    pub key: AliasKey,
    /// What the alias stands for
    pub payload: Payload,
}

impl AliasEntry {
    /// Parse `key` and pair it with `payload`.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::InvalidAlias`] for malformed keys and
    /// [`VcatError::ReservedAlias`] for library aliases that would shadow a
    /// catalog root accessor.
    pub fn new(key: &str, payload: Payload) -> Result<Self> {
        let key = AliasKey::parse(key)?;
        check_reserved(&key, payload.section())?;
        Ok(Self {
            key,
            payload,
        })
    }

    /// Library entry from `group:name[:version]` notation.
    ///
    /// # Errors
    ///
    /// Same as [`AliasEntry::new`], plus [`VcatError::InvalidCatalogEntry`]
    /// for malformed notation.
    pub fn library(key: &str, notation: &str) -> Result<Self> {
        let coordinate =
            LibraryCoordinate::from_notation(notation).ok_or_else(|| VcatError::InvalidCatalogEntry {
                section: Section::Libraries,
                alias: key.to_string(),
                reason: format!("'{notation}' is not in group:name[:version] notation"),
            })?;
        Self::new(key, Payload::Library(coordinate))
    }

    /// Version entry from a plain version string.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::InvalidAlias`] for malformed keys.
    pub fn version(key: &str, version: &str) -> Result<Self> {
        Self::new(key, Payload::Version(VersionSpec::required(version)))
    }

    /// Bundle entry.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::InvalidAlias`] for malformed keys.
    pub fn bundle<I, S>(key: &str, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = members.into_iter().map(Into::into).collect();
        Self::new(key, Payload::Bundle(BundleSpec { members }))
    }

    /// Plugin entry.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::InvalidAlias`] for malformed keys.
    pub fn plugin(key: &str, id: &str, version: VersionBinding) -> Result<Self> {
        Self::new(
            key,
            Payload::Plugin(PluginSpec {
                id: id.to_string(),
                version,
            }),
        )
    }

    /// Section this entry belongs to.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.payload.section()
    }
}

/// Reject library aliases whose first segment is a section root accessor.
///
/// Library groups share the catalog root with `versions`, `bundles` and
/// `plugins`, so such an alias could never be reached.
pub(crate) fn check_reserved(key: &AliasKey, section: Section) -> Result<()> {
    if section != Section::Libraries {
        return Ok(());
    }
    match Section::ALL.iter().filter_map(|s| s.root_accessor()).find(|accessor| *accessor == key.first()) {
        Some(reserved) => Err(VcatError::ReservedAlias {
            alias: key.to_string(),
            reserved: reserved.to_string(),
        }),
        None => Ok(()),
    }
}
