//! Namespace accessor trees
//!
//! Each catalog section compiles into one [`CatalogTree`]: a recursive tree of
//! [`TreeNode`]s mirroring the dotted alias namespace. Building is two-phase:
//!
//! 1. [`TreeBuilder::insert`] places every alias, creating group nodes for
//!    intermediate segments and rejecting duplicate aliases
//! 2. [`TreeBuilder::resolve`] names every node, assigns type names and gives
//!    every node that is both an alias and a prefix of other aliases the
//!    direct-value accessor (`asProvider` by default)
//!
//! The resolved tree is immutable and navigated through [`Accessor`] values:
//!
//! ```text
//! io.quarkus.quarkus.hibernate.orm             → io.quarkus.quarkus.hibernate.orm.asProvider
//! io.quarkus.quarkus.hibernate.orm.deployment  → io.quarkus.quarkus.hibernate.orm.deployment
//! ```
//!
//! # Examples
//!
//! ```rust
//! use vcat_cli::alias::{AliasEntry, AliasKey};
//! use vcat_cli::core::Section;
//! use vcat_cli::tree::{Accessor, ResolveOptions, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new(Section::Libraries);
//! builder.insert_entry(AliasEntry::library("hibernate.orm", "io.quarkus:quarkus-hibernate-orm")?)?;
//! builder.insert_entry(AliasEntry::library(
//!     "hibernate.orm.deployment",
//!     "io.quarkus:quarkus-hibernate-orm-deployment",
//! )?)?;
//! let tree = builder.resolve(&ResolveOptions::default())?;
//!
//! let key = AliasKey::parse("hibernate.orm")?;
//! assert_eq!(tree.accessor_chain(&key), ["hibernate", "orm", "asProvider"]);
//! assert!(matches!(tree.navigate(["hibernate", "orm"]), Some(Accessor::Group(_))));
//! assert!(matches!(tree.navigate(["hibernate", "orm", "deployment"]), Some(Accessor::Value(_))));
//! # Ok::<(), vcat_cli::core::VcatError>(())
//! ```

mod builder;
mod resolve;


pub use builder::TreeBuilder;
pub use resolve::{ResolveOptions, resolve};

use crate::alias::{AliasKey, Payload};
use crate::core::Section;
use crate::naming;
use indexmap::IndexMap;

/// One segment position in a section namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    section: Section,
    segment: String,
    identifier: String,
    path: Vec<String>,
    type_name: Option<String>,
    children: IndexMap<String, TreeNode>,
    alias: Option<AliasKey>,
    payload: Option<Payload>,
    direct_value: Option<String>,
}

impl TreeNode {
    /// Section this node belongs to.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Raw alias segment; empty for the section root.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Accessor identifier; empty for the section root.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Raw segments from the section root to this node.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Dotted raw path.
    #[must_use]
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }

    /// Type name; only group nodes have one.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// True for the section root and for every node with children.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.type_name.is_some()
    }

    /// True when an alias ends at this node.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.payload.is_some()
    }

    /// Children in insertion order, keyed by accessor identifier.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    /// Child reached through accessor `identifier`.
    #[must_use]
    pub fn child(&self, identifier: &str) -> Option<&TreeNode> {
        self.children.get(identifier)
    }

    /// The alias ending at this node.
    #[must_use]
    pub fn alias(&self) -> Option<&AliasKey> {
        self.alias.as_ref()
    }

    /// The payload of the alias ending at this node.
    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Direct-value accessor, present when this node is both leaf and group.
    #[must_use]
    pub fn direct_value(&self) -> Option<&str> {
        self.direct_value.as_deref()
    }

    /// Invoke the accessor `name` on this group.
    ///
    /// Returns `None` for unknown names and when this node is not a group.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<Accessor<'_>> {
        if let Some(child) = self.children.get(name) {
            return Some(Accessor::of(child));
        }
        (self.direct_value.as_deref() == Some(name)).then_some(Accessor::Value(self))
    }

    /// Every accessor this group exposes, direct value first.
    #[must_use]
    pub fn accessors(&self) -> Vec<(&str, Accessor<'_>)> {
        let mut accessors = Vec::with_capacity(self.children.len() + 1);
        if let Some(direct_value) = self.direct_value.as_deref() {
            accessors.push((direct_value, Accessor::Value(self)));
        }
        accessors.extend(self.children.iter().map(|(name, child)| (name.as_str(), Accessor::of(child))));
        accessors
    }

    /// Description of this node as a group.
    #[must_use]
    pub fn group_description(&self) -> String {
        if self.path.is_empty() {
            return format!("Root of the {} accessors", self.section.singular());
        }
        format!("Group of {} at {}", self.section, self.dotted_path())
    }

    /// Description of this node's value accessor.
    #[must_use]
    pub fn value_description(&self) -> Option<String> {
        let alias = self.alias.as_ref()?;
        let payload = self.payload.as_ref()?;
        Some(payload.describe(alias.leaf(), alias.as_str()))
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a TreeNode>) {
        if self.payload.is_some() {
            out.push(self);
        }
        for child in self.children.values() {
            child.collect_leaves(out);
        }
    }
}

/// The result of invoking an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor<'a> {
    /// A group; navigation continues from here
    Group(&'a TreeNode),
    /// A value: the payload of a leaf, or of a group's direct-value accessor
    Value(&'a TreeNode),
}

impl<'a> Accessor<'a> {
    fn of(node: &'a TreeNode) -> Self {
        if node.is_group() { Accessor::Group(node) } else { Accessor::Value(node) }
    }

    /// The node behind this accessor.
    #[must_use]
    pub const fn node(&self) -> &'a TreeNode {
        match self {
            Accessor::Group(node) | Accessor::Value(node) => node,
        }
    }

    /// The payload, for value accessors.
    #[must_use]
    pub fn payload(&self) -> Option<&'a Payload> {
        match self {
            Accessor::Group(_) => None,
            Accessor::Value(node) => node.payload(),
        }
    }

    /// Human description, in the style of generated accessor docs.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Accessor::Group(node) => node.group_description(),
            Accessor::Value(node) => node.value_description().unwrap_or_default(),
        }
    }
}

/// The resolved accessor tree of one catalog section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTree {
    pub(crate) section: Section,
    pub(crate) root: TreeNode,
    pub(crate) len: usize,
    pub(crate) collisions: usize,
    pub(crate) direct_value: String,
}

impl CatalogTree {
    /// Build a tree from a list of entries.
    ///
    /// # Errors
    ///
    /// Any error of [`TreeBuilder::insert`] or [`resolve`].
    pub fn from_entries<I>(section: Section, entries: I, options: &ResolveOptions) -> crate::core::Result<Self>
    where
        I: IntoIterator<Item = crate::alias::AliasEntry>,
    {
        let mut builder = TreeBuilder::new(section);
        for entry in entries {
            builder.insert_entry(entry)?;
        }
        builder.resolve(options)
    }

    /// Section of this tree.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Section root.
    #[must_use]
    pub const fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of aliases.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when the section declares no alias.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes that are both leaf and group.
    #[must_use]
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    /// The direct-value accessor used in this tree.
    #[must_use]
    pub fn direct_value(&self) -> &str {
        &self.direct_value
    }

    /// Follow a chain of accessor identifiers from the root.
    ///
    /// An empty chain yields the root group. Navigating past a value accessor
    /// yields `None`.
    #[must_use]
    pub fn navigate<I, S>(&self, chain: I) -> Option<Accessor<'_>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = Accessor::Group(&self.root);
        for name in chain {
            match current {
                Accessor::Group(node) => current = node.accessor(name.as_ref())?,
                Accessor::Value(_) => return None,
            }
        }
        Some(current)
    }

    /// Node at a raw segment path.
    #[must_use]
    pub fn node_at<I, S>(&self, segments: I) -> Option<&TreeNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .try_fold(&self.root, |node, segment| node.child(&naming::name(segment.as_ref())))
    }

    /// Accessor identifiers a build script writes to reach `alias`.
    ///
    /// Ends with the direct-value accessor when the alias is also a group. For
    /// an alias not in this tree the chain is still well-formed but
    /// [`navigate`](Self::navigate) yields nothing for it.
    #[must_use]
    pub fn accessor_chain(&self, alias: &AliasKey) -> Vec<String> {
        let mut chain: Vec<String> = alias.segments().iter().map(|segment| naming::name(segment)).collect();
        if self.node_at(alias.segments()).is_some_and(|node| node.direct_value().is_some()) {
            chain.push(self.direct_value.clone());
        }
        chain
    }

    /// Payload declared for `alias`.
    #[must_use]
    pub fn get(&self, alias: &AliasKey) -> Option<&Payload> {
        self.navigate(self.accessor_chain(alias))?.payload()
    }

    /// Every node carrying a payload, depth first in insertion order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut leaves = Vec::with_capacity(self.len);
        self.root.collect_leaves(&mut leaves);
        leaves
    }

    /// Every accessor chain in this tree, paired with its accessor.
    #[must_use]
    pub fn accessor_paths(&self) -> Vec<(String, Accessor<'_>)> {
        fn walk<'a>(node: &'a TreeNode, prefix: &str, out: &mut Vec<(String, Accessor<'a>)>) {
            for (name, accessor) in node.accessors() {
                let path = if prefix.is_empty() { name.to_string() } else { format!("{prefix}.{name}") };
                if let Accessor::Group(child) = accessor {
                    out.push((path.clone(), accessor));
                    walk(child, &path, out);
                } else {
                    out.push((path, accessor));
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.root, "", &mut out);
        out
    }
}
