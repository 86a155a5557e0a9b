//! TOML file parsing with path context.

use anyhow::{Context, Result};
use std::path::Path;

/// Read and deserialize a TOML file.
///
/// Errors carry two levels of context: "Failed to read ..." for I/O failures
/// and "Failed to parse ..." for syntax or schema failures, with the
/// underlying [`std::io::Error`] or [`toml::de::Error`] kept as the cause.
///
/// # Examples
///
/// ```rust,no_run
/// use vcat_cli::config::parse_toml_file;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Settings {
///     catalog_name: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let settings: Settings = parse_toml_file(Path::new("vcat.toml"))?;
/// println!("catalog: {}", settings.catalog_name);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not deserialize into `T`.
pub fn parse_toml_file<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
