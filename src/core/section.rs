//! Catalog section types
//!
//! A version catalog is split into four independent alias namespaces. Each
//! section is compiled into its own accessor tree, and aliases in different
//! sections never collide with each other.

use serde::{Deserialize, Serialize};

/// One of the four alias namespaces of a version catalog.
///
/// # Examples
///
/// ```rust
/// use vcat_cli::core::Section;
///
/// assert_eq!(Section::Libraries.to_string(), "libraries");
/// assert_eq!("PLUGINS".parse::<Section>().unwrap(), Section::Plugins);
/// assert!("dependencies".parse::<Section>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Library coordinates (`group:name` with an optional version)
    Libraries,

    /// Version declarations, referenced by libraries and plugins
    Versions,

    /// Named groups of library aliases
    Bundles,

    /// Plugin identifiers with an optional version
    Plugins,
}

impl Section {
    /// All sections in catalog declaration order.
    pub const ALL: [Section; 4] =
        [Section::Versions, Section::Libraries, Section::Bundles, Section::Plugins];

    /// Position of this section in [`Section::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Section::Versions => 0,
            Section::Libraries => 1,
            Section::Bundles => 2,
            Section::Plugins => 3,
        }
    }

    /// Table name of this section in a catalog file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Libraries => "libraries",
            Section::Versions => "versions",
            Section::Bundles => "bundles",
            Section::Plugins => "plugins",
        }
    }

    /// Singular noun used in accessor descriptions and type names.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Section::Libraries => "library",
            Section::Versions => "version",
            Section::Bundles => "bundle",
            Section::Plugins => "plugin",
        }
    }

    /// Suffix appended to the type name of every group node in this section.
    ///
    /// ```rust
    /// use vcat_cli::core::Section;
    ///
    /// assert_eq!(Section::Libraries.type_suffix(), "LibraryAccessors");
    /// ```
    #[must_use]
    pub const fn type_suffix(self) -> &'static str {
        match self {
            Section::Libraries => "LibraryAccessors",
            Section::Versions => "VersionAccessors",
            Section::Bundles => "BundleAccessors",
            Section::Plugins => "PluginAccessors",
        }
    }

    /// Accessor under which the section root hangs off the catalog.
    ///
    /// Library groups are exposed directly at the catalog root, so libraries
    /// have no accessor of their own.
    #[must_use]
    pub const fn root_accessor(self) -> Option<&'static str> {
        match self {
            Section::Libraries => None,
            Section::Versions => Some("versions"),
            Section::Bundles => Some("bundles"),
            Section::Plugins => Some("plugins"),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = crate::core::VcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "libraries" | "library" | "libs" => Ok(Section::Libraries),
            "versions" | "version" => Ok(Section::Versions),
            "bundles" | "bundle" => Ok(Section::Bundles),
            "plugins" | "plugin" => Ok(Section::Plugins),
            _ => Err(crate::core::VcatError::InvalidSection {
                name: s.to_string(),
            }),
        }
    }
}
