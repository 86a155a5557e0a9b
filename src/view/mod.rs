//! Capability views over accessor trees
//!
//! A [`CapabilityView`] exposes one [`CatalogTree`] to a consuming context that
//! may only be allowed some sections. In the plugins block of a build script,
//! for instance, only versions and plugins should be used. Accessors of other
//! sections stay reachable and still return the right value, but every
//! invocation appends an [`Advisory`] to the projection's [`AdvisoryLog`].
//!
//! Views borrow the tree; projecting never copies or rebuilds it.
//!
//! # Advisory accounting
//!
//! - Navigating step by step with [`ViewNode::accessor`] records one advisory
//!   per restricted step
//! - [`CapabilityView::lookup`] of a whole chain records one advisory per call
//! - Listing accessors with [`ViewNode::accessors`] records nothing

mod advisory;

pub use advisory::{Advisory, AdvisoryLog};

use crate::alias::{AliasKey, Payload};
use crate::core::Section;
use crate::tree::{Accessor, CatalogTree, TreeNode};

/// Default catalog accessor name.
pub const DEFAULT_CATALOG_NAME: &str = "libs";

/// Default advice attached to advisories.
pub const DEFAULT_ADVICE: &str = "Only use versions or plugins from catalogs in the plugins block.";

/// Which sections a context may use, and where advisories go.
#[derive(Debug, Clone)]
pub struct Projection {
    allowed: Vec<Section>,
    catalog_name: String,
    advice: String,
    log: AdvisoryLog,
}

impl Projection {
    /// Projection allowing only `allowed`.
    pub fn new(allowed: impl IntoIterator<Item = Section>, log: AdvisoryLog) -> Self {
        let mut allowed: Vec<Section> = allowed.into_iter().collect();
        allowed.sort();
        allowed.dedup();
        Self {
            allowed,
            catalog_name: DEFAULT_CATALOG_NAME.to_string(),
            advice: DEFAULT_ADVICE.to_string(),
            log,
        }
    }

    /// Projection allowing every section.
    #[must_use]
    pub fn unrestricted(log: AdvisoryLog) -> Self {
        Self::new(Section::ALL, log)
    }

    /// Set the catalog accessor name used in advisory paths.
    #[must_use]
    pub fn with_catalog_name(mut self, name: impl Into<String>) -> Self {
        self.catalog_name = name.into();
        self
    }

    /// Set the advice appended to advisory messages.
    #[must_use]
    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = advice.into();
        self
    }

    /// Whether `section` may be used without advisories.
    #[must_use]
    pub fn allows(&self, section: Section) -> bool {
        self.allowed.contains(&section)
    }

    /// Allowed sections.
    #[must_use]
    pub fn allowed(&self) -> &[Section] {
        &self.allowed
    }

    /// Catalog accessor name.
    #[must_use]
    pub fn catalog_name(&self) -> &str {
        &self.catalog_name
    }

    /// The advisory log.
    #[must_use]
    pub fn log(&self) -> &AdvisoryLog {
        &self.log
    }

    fn use_instead(&self) -> String {
        let names: Vec<&str> = self.allowed.iter().map(|section| section.as_str()).collect();
        match names.split_last() {
            None => "nothing".to_string(),
            Some((last, [])) => (*last).to_string(),
            Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
        }
    }
}

/// Project `tree` through `projection`.
#[must_use]
pub fn project<'a>(tree: &'a CatalogTree, projection: &'a Projection) -> CapabilityView<'a> {
    CapabilityView {
        tree,
        projection,
    }
}

/// A read-only projection of one section tree.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityView<'a> {
    tree: &'a CatalogTree,
    projection: &'a Projection,
}

impl<'a> CapabilityView<'a> {
    /// The projected tree.
    #[must_use]
    pub const fn tree(&self) -> &'a CatalogTree {
        self.tree
    }

    /// Section of the projected tree.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.tree.section()
    }

    /// True when this section is outside the allowed set.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        !self.projection.allows(self.tree.section())
    }

    /// Dotted path of the section root, e.g. `libs` or `libs.versions`.
    #[must_use]
    pub fn root_path(&self) -> String {
        match self.section().root_accessor() {
            Some(accessor) => format!("{}.{accessor}", self.projection.catalog_name),
            None => self.projection.catalog_name.clone(),
        }
    }

    /// The section root as a navigable group.
    #[must_use]
    pub fn root(&self) -> ViewNode<'a> {
        ViewNode {
            view: *self,
            node: self.tree.root(),
            path: self.root_path(),
        }
    }

    /// Invoke a whole chain of accessors as one call.
    ///
    /// Records exactly one advisory when the view is restricted and the chain
    /// resolves.
    #[must_use]
    pub fn lookup<I, S>(&self, chain: I) -> Option<ViewAccessor<'a>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = chain.into_iter().collect();
        let accessor = self.tree.navigate(&names)?;
        let mut path = self.root_path();
        for name in &names {
            path.push('.');
            path.push_str(name.as_ref());
        }
        if self.is_restricted() {
            self.record(&path);
        }
        Some(self.wrap(accessor, path))
    }

    /// Payload of `alias`, through one lookup.
    #[must_use]
    pub fn get_alias(&self, alias: &AliasKey) -> Option<&'a Payload> {
        self.lookup(self.tree.accessor_chain(alias))?.payload()
    }

    pub(crate) fn record(&self, path: &str) {
        let section = self.section();
        let message =
            format!("Accessing {section} from version catalogs in this context. {}", self.projection.advice);
        self.projection.log.record(Advisory {
            path: path.to_string(),
            section,
            use_instead: self.projection.use_instead(),
            message,
        });
    }

    fn wrap(&self, accessor: Accessor<'a>, path: String) -> ViewAccessor<'a> {
        match accessor {
            Accessor::Group(node) => ViewAccessor::Group(ViewNode {
                view: *self,
                node,
                path,
            }),
            Accessor::Value(node) => ViewAccessor::Value(ViewValue {
                node,
                path,
                restricted: self.is_restricted(),
            }),
        }
    }
}

/// A group reached through a view.
#[derive(Debug, Clone)]
pub struct ViewNode<'a> {
    view: CapabilityView<'a>,
    node: &'a TreeNode,
    path: String,
}

impl<'a> ViewNode<'a> {
    /// Underlying tree node.
    #[must_use]
    pub const fn node(&self) -> &'a TreeNode {
        self.node
    }

    /// Full dotted accessor path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether accessors below this node are deprecated in this context.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.view.is_restricted()
    }

    /// Invoke one accessor, recording an advisory when restricted.
    #[must_use]
    pub fn accessor(&self, name: &str) -> Option<ViewAccessor<'a>> {
        let accessor = self.node.accessor(name)?;
        let path = format!("{}.{name}", self.path);
        if self.view.is_restricted() {
            self.view.record(&path);
        }
        Some(self.view.wrap(accessor, path))
    }

    /// List accessors without invoking them.
    #[must_use]
    pub fn accessors(&self) -> Vec<(&'a str, ViewAccessor<'a>)> {
        self.node
            .accessors()
            .into_iter()
            .map(|(name, accessor)| (name, self.view.wrap(accessor, format!("{}.{name}", self.path))))
            .collect()
    }
}

/// A value accessor reached through a view.
#[derive(Debug, Clone)]
pub struct ViewValue<'a> {
    node: &'a TreeNode,
    path: String,
    restricted: bool,
}

/// The result of invoking an accessor through a view.
#[derive(Debug, Clone)]
pub enum ViewAccessor<'a> {
    /// A group
    Group(ViewNode<'a>),
    /// A value
    Value(ViewValue<'a>),
}

impl<'a> ViewAccessor<'a> {
    /// Full dotted accessor path.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            ViewAccessor::Group(node) => &node.path,
            ViewAccessor::Value(value) => &value.path,
        }
    }

    /// Underlying tree node.
    #[must_use]
    pub const fn node(&self) -> &'a TreeNode {
        match self {
            ViewAccessor::Group(node) => node.node,
            ViewAccessor::Value(value) => value.node,
        }
    }

    /// Payload, for value accessors.
    #[must_use]
    pub fn payload(&self) -> Option<&'a Payload> {
        match self {
            ViewAccessor::Group(_) => None,
            ViewAccessor::Value(value) => value.node.payload(),
        }
    }

    /// Whether this accessor is deprecated in the view's context.
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        match self {
            ViewAccessor::Group(node) => node.is_restricted(),
            ViewAccessor::Value(value) => value.restricted,
        }
    }

    /// Human description of the accessor.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            ViewAccessor::Group(node) => node.node.group_description(),
            ViewAccessor::Value(value) => value.node.value_description().unwrap_or_default(),
        }
    }
}
