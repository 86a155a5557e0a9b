//! Check that a catalog compiles.
//!
//! Loads the catalog, validates every alias and reference, builds all four
//! accessor trees and prints a per-section summary.
//!
//! ```bash
//! vcat check gradle/libs.versions.toml
//! vcat check gradle/libs.versions.toml --format json
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::catalog::CatalogSummary;
use crate::cli::common::load_catalog;
use crate::config::GeneratorConfig;

/// Command to check a catalog.
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Path to the catalog file
    catalog: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown format or any load/authoring error.
    pub fn execute(self, config: &GeneratorConfig) -> Result<()> {
        self.validate_arguments()?;

        let catalog = load_catalog(&self.catalog, config)?;
        let summary = catalog.summary();

        if self.format == "json" {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            self.print_summary(&summary);
        }
        Ok(())
    }

    fn validate_arguments(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            _ => bail!("Invalid format '{}'. Valid formats are: text, json", self.format),
        }
    }

    fn print_summary(&self, summary: &CatalogSummary) {
        println!("{} {}", "✓".green(), self.catalog.display().to_string().bold());
        for section in &summary.sections {
            let collisions = if section.collisions > 0 {
                format!(" ({} also used as groups)", section.collisions).bright_black().to_string()
            } else {
                String::new()
            };
            println!("  {:<10} {:>4}{collisions}", section.section.to_string().cyan(), section.aliases);
        }
        println!(
            "{} aliases, {} leaf/group collisions resolved",
            summary.total_aliases(),
            summary.total_collisions()
        );
    }
}
