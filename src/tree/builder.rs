//! Namespace tree builder.
//!
//! The builder accumulates aliases of one section into a mutable tree keyed by
//! raw segment. Nothing is named here; naming and collision resolution run once
//! every alias is in, see [`resolve`](super::resolve).

use crate::alias::{AliasEntry, AliasKey, Payload, check_reserved};
use crate::core::{Result, Section, VcatError};
use crate::tree::resolve::{ResolveOptions, resolve};
use crate::tree::CatalogTree;
use indexmap::IndexMap;
use tracing::trace;

/// Mutable node used while aliases are being inserted.
#[derive(Debug, Default)]
pub(crate) struct BuilderNode {
    /// Children keyed by raw segment, in insertion order
    pub(crate) children: IndexMap<String, BuilderNode>,
    /// Alias and payload when some alias ends at this node
    pub(crate) leaf: Option<(AliasKey, Payload)>,
}

/// Accumulates the aliases of one catalog section.
///
/// # Examples
///
/// ```rust
/// use vcat_cli::alias::AliasEntry;
/// use vcat_cli::core::Section;
/// use vcat_cli::tree::{ResolveOptions, TreeBuilder};
///
/// let mut builder = TreeBuilder::new(Section::Versions);
/// builder.insert_entry(AliasEntry::version("quarkus", "2.13.5.Final")?)?;
/// builder.insert_entry(AliasEntry::version("quarkus.plugin", "2.13.5.Final")?)?;
///
/// let tree = builder.resolve(&ResolveOptions::default())?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.collisions(), 1);
/// # Ok::<(), vcat_cli::core::VcatError>(())
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    section: Section,
    pub(crate) root: BuilderNode,
    len: usize,
}

impl TreeBuilder {
    /// Empty builder for `section`.
    #[must_use]
    pub fn new(section: Section) -> Self {
        Self {
            section,
            root: BuilderNode::default(),
            len: 0,
        }
    }

    /// Section this builder accumulates.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Number of aliases inserted so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when nothing was inserted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `payload` at the path spelled by `key`.
    ///
    /// Intermediate segments become group nodes. If another alias already
    /// ends at the same path the insert fails; if the path is already a group
    /// the node becomes both group and leaf, which the resolver handles.
    ///
    /// # Errors
    ///
    /// - [`VcatError::DuplicateAlias`] if `key` was already inserted
    /// - [`VcatError::InvalidCatalogEntry`] if `payload` belongs to another section
    /// - [`VcatError::ReservedAlias`] for a library alias starting with
    ///   `versions`, `bundles` or `plugins`
    pub fn insert(&mut self, key: AliasKey, payload: Payload) -> Result<()> {
        if payload.section() != self.section {
            return Err(VcatError::InvalidCatalogEntry {
                section: self.section,
                alias: key.to_string(),
                reason: format!("a {} payload cannot be declared here", payload.section().singular()),
            });
        }
        check_reserved(&key, self.section)?;

        let mut node = &mut self.root;
        for segment in key.segments() {
            node = node.children.entry(segment.clone()).or_default();
        }

        if node.leaf.is_some() {
            return Err(VcatError::DuplicateAlias {
                section: self.section,
                alias: key.to_string(),
            });
        }

        trace!(section = %self.section, alias = %key, "inserted alias");
        node.leaf = Some((key, payload));
        self.len += 1;
        Ok(())
    }

    /// Insert a catalog entry.
    ///
    /// # Errors
    ///
    /// Same as [`TreeBuilder::insert`].
    pub fn insert_entry(&mut self, entry: AliasEntry) -> Result<()> {
        self.insert(entry.key, entry.payload)
    }

    /// Name every node, resolve leaf/group collisions and freeze the tree.
    ///
    /// # Errors
    ///
    /// See [`resolve`].
    pub fn resolve(self, options: &ResolveOptions) -> Result<CatalogTree> {
        resolve(self, options)
    }
}
