//! Helpers shared by the CLI commands.

use crate::catalog::Catalog;
use crate::config::GeneratorConfig;
use crate::manifest::CatalogFile;
use crate::view::Advisory;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use strsim::levenshtein;

/// Maximum edit distance, as a percentage of the requested path length, for a
/// "did you mean" suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 40;

/// Load, validate and compile a catalog file.
///
/// # Errors
///
/// Returns loader errors and authoring errors, each with the catalog path as
/// context.
pub fn load_catalog(path: &Path, config: &GeneratorConfig) -> Result<Catalog> {
    let file = CatalogFile::load(path)?;
    let entries = file
        .entries()
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    Catalog::build(entries, config).with_context(|| format!("Failed to compile {}", path.display()))
}

/// Closest accessor paths to `target`, best first.
pub fn suggest<'a, I>(target: &str, candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let limit = target.len() * SIMILARITY_THRESHOLD_PERCENT / 100;
    let mut scored: Vec<_> = candidates
        .into_iter()
        .map(|candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= limit)
        .collect();
    scored.sort_by_key(|(candidate, distance)| (*distance, *candidate));
    scored.into_iter().take(3).map(|(candidate, _)| candidate).collect()
}

/// Print advisories to stderr.
///
/// Logging already happened when each advisory was recorded.
pub fn report_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        eprintln!(
            "{} {}: {}",
            "warning:".yellow().bold(),
            advisory.path.cyan(),
            advisory.message
        );
    }
}
