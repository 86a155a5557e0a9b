//! Collision resolution and naming.
//!
//! Runs once after every alias of a section has been inserted. Each node gets
//! its accessor identifier, dotted path and type name, and every node that is
//! both a leaf and a group gets the direct-value accessor. Because the walk
//! only starts after insertion is complete, the result never depends on the
//! order in which aliases were declared.

use crate::core::{Result, Section, VcatError};
use crate::naming::{SiblingNames, is_identifier, type_name};
use crate::tree::builder::{BuilderNode, TreeBuilder};
use crate::tree::{CatalogTree, TreeNode};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::debug;

/// Options for [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Identifier exposing the payload of a node that is also a group
    pub direct_value: String,
}

impl ResolveOptions {
    /// Default direct-value accessor.
    pub const DEFAULT_DIRECT_VALUE: &'static str = "asProvider";

    /// Options with a custom direct-value accessor.
    #[must_use]
    pub fn new(direct_value: impl Into<String>) -> Self {
        Self {
            direct_value: direct_value.into(),
        }
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIRECT_VALUE)
    }
}

/// Freeze a builder into an immutable [`CatalogTree`].
///
/// # Errors
///
/// - [`VcatError::NamingCollision`] when two siblings normalize to one
///   identifier, or a child of a leaf/group node normalizes to the
///   direct-value accessor
/// - [`VcatError::ConfigError`] when `options.direct_value` is not a valid
///   accessor identifier
pub fn resolve(builder: TreeBuilder, options: &ResolveOptions) -> Result<CatalogTree> {
    if !is_identifier(&options.direct_value) {
        return Err(VcatError::ConfigError {
            message: format!(
                "direct-value accessor '{}' is not a valid identifier",
                options.direct_value
            ),
        });
    }

    let section = builder.section();
    let len = builder.len();
    let mut resolver = Resolver {
        section,
        options,
        collisions: 0,
        type_names: HashMap::new(),
    };
    let root = resolver.freeze(String::new(), String::new(), Vec::new(), builder.root)?;

    debug!(
        section = %section,
        aliases = len,
        collisions = resolver.collisions,
        "resolved accessor tree"
    );

    Ok(CatalogTree {
        section,
        root,
        len,
        collisions: resolver.collisions,
        direct_value: options.direct_value.clone(),
    })
}

struct Resolver<'o> {
    section: Section,
    options: &'o ResolveOptions,
    collisions: usize,
    /// Type names handed out so far, with the dotted path of their group
    type_names: HashMap<String, String>,
}

impl Resolver<'_> {
    fn freeze(
        &mut self,
        segment: String,
        identifier: String,
        path: Vec<String>,
        node: BuilderNode,
    ) -> Result<TreeNode> {
        let dotted = path.join(".");
        let mut siblings = SiblingNames::new(self.section, &dotted);

        let is_group = path.is_empty() || !node.children.is_empty();
        let (alias, payload) = match node.leaf {
            Some((alias, payload)) => (Some(alias), Some(payload)),
            None => (None, None),
        };

        let direct_value = if is_group && alias.is_some() {
            siblings.reserve(&dotted, self.options.direct_value.clone())?;
            self.collisions += 1;
            debug!(section = %self.section, alias = %dotted, "alias is also a group");
            Some(self.options.direct_value.clone())
        } else {
            None
        };

        let type_name = if is_group { Some(self.claim_type_name(&path, &dotted)?) } else { None };

        let mut children = IndexMap::with_capacity(node.children.len());
        for (child_segment, child) in node.children {
            let child_identifier = siblings.claim(&child_segment)?;
            let mut child_path = path.clone();
            child_path.push(child_segment.clone());
            let frozen = self.freeze(child_segment, child_identifier.clone(), child_path, child)?;
            children.insert(child_identifier, frozen);
        }

        Ok(TreeNode {
            section: self.section,
            type_name,
            segment,
            identifier,
            path,
            children,
            alias,
            payload,
            direct_value,
        })
    }

    /// Type name of the group at `path`, unique within the section.
    ///
    /// Distinct paths can join to the same name (`io-quarkus` and
    /// `io.quarkus`); the second one fails with a naming collision.
    fn claim_type_name(&mut self, path: &[String], dotted: &str) -> Result<String> {
        let name = type_name(self.section, path);
        if let Some(existing) = self.type_names.get(&name) {
            return Err(VcatError::NamingCollision {
                section: self.section,
                parent: String::new(),
                first: existing.clone(),
                second: dotted.to_string(),
                identifier: name,
            });
        }
        self.type_names.insert(name.clone(), dotted.to_string());
        Ok(name)
    }
}
