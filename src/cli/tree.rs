//! Display the accessor tree of a catalog.
//!
//! Renders every accessor a build script can reach, in declaration order.
//! Aliases that are also groups show their direct-value accessor first.
//!
//! # Examples
//!
//! ```bash
//! vcat tree gradle/libs.versions.toml
//! vcat tree gradle/libs.versions.toml --section versions
//! vcat tree gradle/libs.versions.toml --plugins-block --format json
//! ```
//!
//! # Output Format
//!
//! ```text
//! libs
//! └── io
//!     └── quarkus
//!         └── quarkus
//!             ├── agroal  io.quarkus:quarkus-agroal (version.ref = io.quarkus.quarkus.agroal)
//!             └── hibernate
//!                 └── orm
//!                     ├── asProvider  io.quarkus:quarkus-hibernate-orm (...)
//!                     └── deployment  io.quarkus:quarkus-hibernate-orm-deployment (...)
//! ```
//!
//! With `--plugins-block`, accessors of sections a plugins block should not
//! use are marked `(restricted)`.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::catalog::CatalogView;
use crate::cli::common::load_catalog;
use crate::config::GeneratorConfig;
use crate::core::Section;
use crate::view::{ViewAccessor, ViewNode};

/// Command to display accessor trees.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Path to the catalog file
    catalog: PathBuf,

    /// Show only one section (libraries, versions, bundles, plugins)
    #[arg(short = 's', long)]
    section: Option<String>,

    /// Show the catalog as seen from a plugins block
    #[arg(long)]
    plugins_block: bool,

    /// Output format (tree, json)
    ///
    /// - `tree`: Hierarchical tree with box-drawing characters (default)
    /// - `json`: JSON format for scripting and programmatic access
    #[arg(short = 'f', long, default_value = "tree")]
    format: String,
}

impl TreeCommand {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid arguments or any load/authoring error.
    pub fn execute(self, config: &GeneratorConfig) -> Result<()> {
        let sections = self.validate_arguments()?;

        let catalog = load_catalog(&self.catalog, config)?;
        let view =
            if self.plugins_block { catalog.plugins_block_view() } else { catalog.full_view() };

        match self.format.as_str() {
            "json" => self.output_json(&view, &sections)?,
            _ => self.output_tree(&view, &sections),
        }
        Ok(())
    }

    fn validate_arguments(&self) -> Result<Vec<Section>> {
        match self.format.as_str() {
            "tree" | "json" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid format '{}'. Valid formats are: tree, json",
                    self.format
                ));
            }
        }

        match &self.section {
            Some(name) => Ok(vec![name.parse::<Section>()?]),
            None => Ok(Section::ALL.to_vec()),
        }
    }

    fn output_tree(&self, view: &CatalogView<'_>, sections: &[Section]) {
        for (i, &section) in sections.iter().enumerate() {
            if i > 0 {
                println!();
            }
            let capability = view.section(section);
            let root = capability.root();
            let marker = if capability.is_restricted() {
                format!(" {}", "(restricted)".yellow())
            } else {
                String::new()
            };
            println!("{}{marker}", root.path().cyan().bold());

            let accessors = root.accessors();
            if accessors.is_empty() {
                println!("{}", "(no aliases)".bright_black());
            }
            for (j, (name, accessor)) in accessors.iter().enumerate() {
                Self::print_accessor(name, accessor, "", j == accessors.len() - 1);
            }
        }
    }

    fn print_accessor(name: &str, accessor: &ViewAccessor<'_>, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        let restricted = if accessor.is_restricted() {
            format!(" {}", "(restricted)".yellow())
        } else {
            String::new()
        };

        match accessor {
            ViewAccessor::Group(node) => {
                println!("{prefix}{connector}{}{restricted}", name.cyan());
                let child_prefix =
                    if is_last { format!("{prefix}    ") } else { format!("{prefix}│   ") };
                let children = node.accessors();
                for (i, (child_name, child)) in children.iter().enumerate() {
                    Self::print_accessor(child_name, child, &child_prefix, i == children.len() - 1);
                }
            }
            ViewAccessor::Value(_) => {
                let value = accessor
                    .payload()
                    .map(|payload| format!("  {}", payload.to_string().bright_black()))
                    .unwrap_or_default();
                println!("{prefix}{connector}{name}{value}{restricted}");
            }
        }
    }

    fn output_json(&self, view: &CatalogView<'_>, sections: &[Section]) -> Result<()> {
        let sections: Vec<_> = sections
            .iter()
            .map(|&section| {
                let capability = view.section(section);
                let root = capability.root();
                serde_json::json!({
                    "section": section,
                    "path": root.path(),
                    "typeName": root.node().type_name(),
                    "restricted": capability.is_restricted(),
                    "aliases": capability.tree().len(),
                    "accessors": Self::children_to_json(&root),
                })
            })
            .collect();

        let json = serde_json::json!({ "sections": sections });
        println!("{}", serde_json::to_string_pretty(&json)?);
        Ok(())
    }

    fn children_to_json(node: &ViewNode<'_>) -> Vec<serde_json::Value> {
        node.accessors()
            .iter()
            .map(|(name, accessor)| Self::accessor_to_json(name, accessor))
            .collect()
    }

    fn accessor_to_json(name: &str, accessor: &ViewAccessor<'_>) -> serde_json::Value {
        match accessor {
            ViewAccessor::Group(node) => serde_json::json!({
                "name": name,
                "path": accessor.path(),
                "kind": "group",
                "typeName": node.node().type_name(),
                "description": accessor.description(),
                "restricted": accessor.is_restricted(),
                "accessors": Self::children_to_json(node),
            }),
            ViewAccessor::Value(_) => serde_json::json!({
                "name": name,
                "path": accessor.path(),
                "kind": "value",
                "alias": accessor.node().alias(),
                "description": accessor.description(),
                "restricted": accessor.is_restricted(),
                "value": accessor.payload(),
            }),
        }
    }
}
