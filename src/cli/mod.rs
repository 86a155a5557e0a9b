//! Command-line interface for vcat.
//!
//! Each command lives in its own module with its own argument struct and an
//! `execute` method taking the loaded [`GeneratorConfig`].
//!
//! # Available Commands
//!
//! - `check` - Validate a catalog and summarize its accessor trees
//! - `tree` - Display the accessor tree of one or all sections
//! - `get` - Resolve one accessor path such as `libs.versions.quarkus`
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug logging
//! - `--quiet` - Disable logging
//! - `--config` - Path to a generator config file (overrides `VCAT_CONFIG`)
//!
//! # Example
//!
//! ```bash
//! vcat check gradle/libs.versions.toml
//! vcat tree gradle/libs.versions.toml --section plugins
//! vcat --config ci.toml get gradle/libs.versions.toml libs.bundles.quarkus.rest
//! ```

pub mod check;
pub mod common;
pub mod get;
pub mod tree;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::GeneratorConfig;

/// Runtime configuration for CLI execution.
///
/// Built from the global flags so tests can drive commands without touching
/// process-wide state.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter directive. `None` disables logging.
    pub log_level: Option<String>,

    /// Explicit generator config file.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    /// Create a configuration with logging off and the default config lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the stderr tracing subscriber.
    ///
    /// Does nothing when logging is off or a subscriber is already set.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };
        let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Main CLI structure for vcat.
#[derive(Parser)]
#[command(
    name = "vcat",
    about = "Version catalog accessor compiler",
    version,
    author,
    long_about = "vcat compiles the dotted aliases of a libs.versions.toml catalog into the typed accessor tree a build script navigates."
)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the generator config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog and summarize its accessor trees
    Check(check::CheckCommand),

    /// Display accessor trees
    Tree(tree::TreeCommand),

    /// Resolve one accessor path
    Get(get::GetCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns config errors and any error of the executed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Build a [`CliConfig`] from the global flags.
    ///
    /// `--verbose` selects `debug`, `--quiet` turns logging off, otherwise
    /// `RUST_LOG` applies with `warn` as the fallback.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute with an explicit [`CliConfig`].
    ///
    /// # Errors
    ///
    /// Returns config errors and any error of the executed command.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let generator = GeneratorConfig::load_with_optional(config.config_path.clone())?;
        debug!(catalog_name = %generator.catalog_name, "loaded generator config");

        match self.command {
            Commands::Check(cmd) => cmd.execute(&generator),
            Commands::Tree(cmd) => cmd.execute(&generator),
            Commands::Get(cmd) => cmd.execute(&generator),
        }
    }
}
