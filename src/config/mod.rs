//! Generator configuration
//!
//! vcat works without any configuration. An optional TOML file can rename the
//! catalog accessor, the direct-value accessor and the advice attached to
//! restricted-access advisories:
//!
//! ```toml
//! catalog-name = "libs"
//! direct-value-accessor = "asProvider"
//! restricted-advice = "Only use versions or plugins from catalogs in the plugins block."
//! ```
//!
//! # Lookup Order
//!
//! 1. The path given with `--config` (must exist)
//! 2. The `VCAT_CONFIG` environment variable (must exist)
//! 3. The default location, if the file is there:
//!    - Unix/macOS: `~/.vcat/config.toml`
//!    - Windows: `%LOCALAPPDATA%\vcat\config.toml`
//! 4. Built-in defaults

mod parser;

pub use parser::parse_toml_file;

use crate::core::VcatError;
use crate::naming::is_identifier;
use crate::tree::ResolveOptions;
use crate::view::{DEFAULT_ADVICE, DEFAULT_CATALOG_NAME};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "VCAT_CONFIG";

/// Settings applied when compiling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Name of the catalog accessor (`libs` in `libs.versions.quarkus`)
    pub catalog_name: String,

    /// Accessor exposing the value of an alias that is also a group
    pub direct_value_accessor: String,

    /// Advice appended to restricted-access advisories
    pub restricted_advice: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog_name: DEFAULT_CATALOG_NAME.to_string(),
            direct_value_accessor: ResolveOptions::DEFAULT_DIRECT_VALUE.to_string(),
            restricted_advice: DEFAULT_ADVICE.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration following the lookup order above.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly named file is missing, or if the
    /// chosen file cannot be read, parsed or validated.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_required(&path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV)
            && !env_path.is_empty()
        {
            return Self::load_required(Path::new(&env_path));
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn load_required(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VcatError::ConfigNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        Self::load_from(path)
    }

    /// Load and validate configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, has
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");
        let config: Self = parse_toml_file(path)?;
        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Default configuration file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory (or the local data directory on
    /// Windows) cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("vcat")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".vcat")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Check that names are usable as accessors.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::ConfigError`] for an empty or malformed catalog
    /// name or direct-value accessor.
    pub fn validate(&self) -> Result<(), VcatError> {
        if !is_identifier(&self.catalog_name) {
            return Err(VcatError::ConfigError {
                message: format!("catalog-name '{}' is not a valid accessor name", self.catalog_name),
            });
        }
        if !is_identifier(&self.direct_value_accessor) {
            return Err(VcatError::ConfigError {
                message: format!(
                    "direct-value-accessor '{}' is not a valid accessor name",
                    self.direct_value_accessor
                ),
            });
        }
        Ok(())
    }

    /// Resolver options derived from this configuration.
    #[must_use]
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::new(&self.direct_value_accessor)
    }
}
