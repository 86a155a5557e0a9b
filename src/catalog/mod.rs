//! Catalog facade
//!
//! A [`Catalog`] holds the four resolved section trees of one version catalog
//! and hands out [`CatalogView`]s for the contexts that consume it. Accessor
//! chains are spelled the way a build script writes them:
//!
//! | Chain                               | Section   |
//! |-------------------------------------|-----------|
//! | `libs.io.quarkus.quarkus.agroal`    | libraries |
//! | `libs.versions.quarkus`             | versions  |
//! | `libs.bundles.quarkus.hibernate`    | bundles   |
//! | `libs.plugins.quarkus`              | plugins   |
//!
//! Library groups sit directly under the catalog accessor; the other sections
//! hang off their own entry accessor.
//!
//! # Examples
//!
//! ```rust
//! use vcat_cli::alias::AliasEntry;
//! use vcat_cli::catalog::Catalog;
//! use vcat_cli::config::GeneratorConfig;
//!
//! let catalog = Catalog::build(
//!     [
//!         AliasEntry::version("quarkus", "2.13.5.Final")?,
//!         AliasEntry::library("io.quarkus.quarkus.agroal", "io.quarkus:quarkus-agroal")?,
//!     ],
//!     &GeneratorConfig::default(),
//! )?;
//!
//! let view = catalog.plugins_block_view();
//! assert_eq!(view.version_string("quarkus"), Some("2.13.5.Final"));
//! assert!(view.resolve("libs.io.quarkus.quarkus.agroal").is_some());
//! assert_eq!(view.advisories().len(), 1);
//! # Ok::<(), vcat_cli::core::VcatError>(())
//! ```

use crate::alias::{AliasEntry, AliasKey};
use crate::config::GeneratorConfig;
use crate::core::{Result, Section};
use crate::tree::{CatalogTree, TreeBuilder};
use crate::view::{Advisory, AdvisoryLog, CapabilityView, Projection, ViewAccessor, ViewNode, project};
use serde::Serialize;
use tracing::debug;

/// The four compiled section trees of a version catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    libraries: CatalogTree,
    versions: CatalogTree,
    bundles: CatalogTree,
    plugins: CatalogTree,
    config: GeneratorConfig,
}

impl Catalog {
    /// Compile catalog entries into section trees.
    ///
    /// Entries may come in any section order; within a section, declaration
    /// order is kept as accessor order.
    ///
    /// # Errors
    ///
    /// Returns the first authoring error: duplicate alias, naming collision,
    /// or an invalid configuration.
    pub fn build<I>(entries: I, config: &GeneratorConfig) -> Result<Self>
    where
        I: IntoIterator<Item = AliasEntry>,
    {
        config.validate()?;

        let mut builders = Section::ALL.map(TreeBuilder::new);
        for entry in entries {
            builders[entry.section().index()].insert_entry(entry)?;
        }

        let options = config.resolve_options();
        let [versions, libraries, bundles, plugins] = builders.map(|builder| builder.resolve(&options));
        let catalog = Self {
            libraries: libraries?,
            versions: versions?,
            bundles: bundles?,
            plugins: plugins?,
            config: config.clone(),
        };

        debug!(
            libraries = catalog.libraries.len(),
            versions = catalog.versions.len(),
            bundles = catalog.bundles.len(),
            plugins = catalog.plugins.len(),
            "catalog compiled"
        );
        Ok(catalog)
    }

    /// Tree of one section.
    #[must_use]
    pub const fn tree(&self, section: Section) -> &CatalogTree {
        match section {
            Section::Libraries => &self.libraries,
            Section::Versions => &self.versions,
            Section::Bundles => &self.bundles,
            Section::Plugins => &self.plugins,
        }
    }

    /// Library tree.
    #[must_use]
    pub const fn libraries(&self) -> &CatalogTree {
        &self.libraries
    }

    /// Version tree.
    #[must_use]
    pub const fn versions(&self) -> &CatalogTree {
        &self.versions
    }

    /// Bundle tree.
    #[must_use]
    pub const fn bundles(&self) -> &CatalogTree {
        &self.bundles
    }

    /// Plugin tree.
    #[must_use]
    pub const fn plugins(&self) -> &CatalogTree {
        &self.plugins
    }

    /// Configuration the catalog was built with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Counts per section.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        let sections = Section::ALL
            .iter()
            .map(|&section| {
                let tree = self.tree(section);
                SectionSummary {
                    section,
                    aliases: tree.len(),
                    collisions: tree.collisions(),
                }
            })
            .collect();
        CatalogSummary {
            catalog_name: self.config.catalog_name.clone(),
            sections,
        }
    }

    /// View with every section unrestricted.
    #[must_use]
    pub fn full_view(&self) -> CatalogView<'_> {
        self.view_with(Projection::unrestricted(AdvisoryLog::new()))
    }

    /// View for a plugins block: versions and plugins unrestricted, libraries
    /// and bundles reachable but recorded as advisories.
    #[must_use]
    pub fn plugins_block_view(&self) -> CatalogView<'_> {
        self.view_with(Projection::new([Section::Versions, Section::Plugins], AdvisoryLog::new()))
    }

    /// View through a custom projection; catalog name and advice come from
    /// the catalog configuration.
    #[must_use]
    pub fn view_with(&self, projection: Projection) -> CatalogView<'_> {
        CatalogView {
            catalog: self,
            projection: projection
                .with_catalog_name(&self.config.catalog_name)
                .with_advice(&self.config.restricted_advice),
        }
    }
}

/// Alias and collision counts of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    /// Catalog accessor name
    pub catalog_name: String,
    /// One entry per section, in catalog order
    pub sections: Vec<SectionSummary>,
}

impl CatalogSummary {
    /// Total number of aliases.
    #[must_use]
    pub fn total_aliases(&self) -> usize {
        self.sections.iter().map(|s| s.aliases).sum()
    }

    /// Total number of leaf/group collisions resolved.
    #[must_use]
    pub fn total_collisions(&self) -> usize {
        self.sections.iter().map(|s| s.collisions).sum()
    }
}

/// Counts for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    /// The section
    pub section: Section,
    /// Number of aliases
    pub aliases: usize,
    /// Number of nodes that are both leaf and group
    pub collisions: usize,
}

/// A catalog as seen from one consuming context.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    projection: Projection,
}

impl CatalogView<'_> {
    /// Projection of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> CapabilityView<'_> {
        project(self.catalog.tree(section), &self.projection)
    }

    /// Enter a section step by step.
    ///
    /// Entering a restricted section that has its own entry accessor
    /// (`libs.bundles`) records one advisory. Library groups sit at the
    /// catalog root, so there is no entry step for libraries.
    #[must_use]
    pub fn enter(&self, section: Section) -> ViewNode<'_> {
        let view = self.section(section);
        if view.is_restricted() && section.root_accessor().is_some() {
            view.record(&view.root_path());
        }
        view.root()
    }

    /// Resolve a full accessor chain such as `libs.versions.quarkus`.
    ///
    /// The whole chain counts as one call: at most one advisory is recorded.
    /// Returns `None` when the chain does not start with the catalog name or
    /// names no accessor.
    #[must_use]
    pub fn resolve(&self, dotted: &str) -> Option<ViewAccessor<'_>> {
        let mut names = dotted.split('.');
        if names.next()? != self.projection.catalog_name() {
            return None;
        }
        let rest: Vec<&str> = names.collect();

        let (section, chain) = match rest.split_first() {
            Some((first, chain)) => Section::ALL
                .into_iter()
                .find(|section| section.root_accessor() == Some(*first))
                .map_or((Section::Libraries, &rest[..]), |section| (section, chain)),
            None => (Section::Libraries, &rest[..]),
        };

        let view = self.section(section);
        if chain.is_empty() {
            let root = view.root();
            if view.is_restricted() && section.root_accessor().is_some() {
                view.record(root.path());
            }
            return Some(ViewAccessor::Group(root));
        }
        view.lookup(chain)
    }

    /// Single version string of a version alias.
    ///
    /// `None` for unknown aliases and for rich versions that do not reduce to
    /// one version.
    #[must_use]
    pub fn version_string(&self, alias: &str) -> Option<&str> {
        let key = AliasKey::parse(alias).ok()?;
        self.section(Section::Versions).get_alias(&key)?.single_version()
    }

    /// Every accessor path reachable in `section`, without recording.
    #[must_use]
    pub fn accessor_paths(&self, section: Section) -> Vec<String> {
        let view = self.section(section);
        let root = view.root_path();
        view.tree()
            .accessor_paths()
            .into_iter()
            .map(|(path, _)| format!("{root}.{path}"))
            .collect()
    }

    /// Whether `section` is restricted in this view.
    #[must_use]
    pub fn is_restricted(&self, section: Section) -> bool {
        !self.projection.allows(section)
    }

    /// Shared advisory log of this view.
    #[must_use]
    pub fn log(&self) -> &AdvisoryLog {
        self.projection.log()
    }

    /// Copy of the advisories recorded so far.
    #[must_use]
    pub fn advisories(&self) -> Vec<Advisory> {
        self.projection.log().snapshot()
    }
}
