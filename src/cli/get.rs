//! Resolve one accessor path.
//!
//! ```bash
//! vcat get gradle/libs.versions.toml libs.versions.quarkus
//! vcat get gradle/libs.versions.toml libs.quarkus.hibernate.orm.asProvider
//! vcat get gradle/libs.versions.toml libs.io.quarkus --plugins-block
//! ```
//!
//! The path is invoked as a single call. With `--plugins-block`, reaching a
//! library or bundle prints a warning on stderr but still succeeds.

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::catalog::CatalogView;
use crate::cli::common::{load_catalog, report_advisories, suggest};
use crate::config::GeneratorConfig;
use crate::core::Section;
use crate::view::ViewAccessor;

/// Command to resolve an accessor path.
#[derive(Args, Debug)]
pub struct GetCommand {
    /// Path to the catalog file
    catalog: PathBuf,

    /// Accessor path, starting with the catalog name (e.g. `libs.versions.quarkus`)
    path: String,

    /// Resolve as a plugins block would
    #[arg(long)]
    plugins_block: bool,
}

impl GetCommand {
    /// Execute the get command.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog does not compile or the path names no
    /// accessor.
    pub fn execute(self, config: &GeneratorConfig) -> Result<()> {
        let catalog = load_catalog(&self.catalog, config)?;
        let view =
            if self.plugins_block { catalog.plugins_block_view() } else { catalog.full_view() };

        let accessor = view.resolve(&self.path).ok_or_else(|| unknown_accessor(&view, &self.path))?;
        print_accessor(&accessor);

        report_advisories(&view.advisories());
        Ok(())
    }
}

fn print_accessor(accessor: &ViewAccessor<'_>) {
    match accessor {
        ViewAccessor::Group(node) => {
            println!("{} {}", accessor.path().cyan().bold(), "(group)".bright_black());
            if let Some(type_name) = node.node().type_name() {
                println!("  {} {type_name}", "type:".bright_black());
            }
            println!("  {}", accessor.description());
            for (name, child) in node.accessors() {
                let kind = match child {
                    ViewAccessor::Group(_) => "group",
                    ViewAccessor::Value(_) => "value",
                };
                println!("  {} {name} {}", "-".bright_black(), format!("({kind})").bright_black());
            }
        }
        ViewAccessor::Value(_) => {
            let Some(payload) = accessor.payload() else {
                return;
            };
            println!("{}", payload);
            if payload.section() == Section::Versions {
                match payload.single_version() {
                    Some(version) => println!("  {} {version}", "version:".bright_black()),
                    None => println!("  {}", "(no single version)".bright_black()),
                }
            }
            println!("  {}", accessor.description().bright_black());
        }
    }
}

fn unknown_accessor(view: &CatalogView<'_>, path: &str) -> anyhow::Error {
    let candidates: Vec<String> =
        Section::ALL.into_iter().flat_map(|section| view.accessor_paths(section)).collect();
    let suggestions = suggest(path, candidates.iter().map(String::as_str));

    if suggestions.is_empty() {
        anyhow!("Unknown accessor '{path}'")
    } else {
        anyhow!("Unknown accessor '{path}'. Did you mean: {}?", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::test_utils::{CatalogFixture, fixtures};
    use tempfile::TempDir;

    fn command(path: &str, plugins_block: bool) -> (TempDir, GetCommand) {
        let temp = TempDir::new().unwrap();
        let catalog = CatalogFixture::sample().write_to(temp.path()).unwrap();
        let cmd = GetCommand {
            catalog,
            path: path.to_string(),
            plugins_block,
        };
        (temp, cmd)
    }

    #[test]
    fn test_get_version() {
        let (_temp, cmd) = command("libs.versions.quarkus", false);
        assert!(cmd.execute(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_get_restricted_still_succeeds() {
        let (_temp, cmd) = command("libs.io.quarkus.quarkus.agroal", true);
        assert!(cmd.execute(&GeneratorConfig::default()).is_ok());
    }

    #[test]
    fn test_get_unknown_suggests() {
        let (_temp, cmd) = command("libs.version.quarkus", false);
        let err = cmd.execute(&GeneratorConfig::default()).unwrap_err().to_string();
        assert!(err.contains("Unknown accessor 'libs.version.quarkus'"));
        assert!(err.contains("libs.versions.quarkus"));
    }

    #[test]
    fn test_unknown_accessor_without_candidates() {
        let catalog = Catalog::build(fixtures::sample_entries(), &GeneratorConfig::default()).unwrap();
        let view = catalog.full_view();
        let err = unknown_accessor(&view, "gradle");
        assert_eq!(err.to_string(), "Unknown accessor 'gradle'");
        assert!(view.advisories().is_empty());
    }
}
