//! vcat - version catalog accessor compiler
//!
//! Turns the flat, dotted aliases of a Gradle-style `libs.versions.toml`
//! catalog into the tree of accessors a build script navigates:
//!
//! ```text
//! "io.quarkus.quarkus.hibernate.orm"            -> libs.io.quarkus.quarkus.hibernate.orm.asProvider
//! "io.quarkus.quarkus.hibernate.orm.deployment" -> libs.io.quarkus.quarkus.hibernate.orm.deployment
//! ```
//!
//! An alias that is also the prefix of longer aliases becomes a group whose
//! own value moves behind the direct-value accessor (`asProvider`).
//!
//! # Pipeline
//!
//! 1. [`manifest`] - Parse the TOML catalog and validate its entries
//! 2. [`alias`] / [`naming`] - Split aliases into segments and map segments to
//!    accessor identifiers
//! 3. [`tree`] - Build one namespace tree per section and resolve leaf/group
//!    collisions
//! 4. [`catalog`] - Hold the four trees as one immutable catalog
//! 5. [`view`] - Project the catalog for a consuming context, recording
//!    advisories when restricted sections are used
//!
//! # Supporting Modules
//!
//! - [`cli`] - Command-line interface (`check`, `tree`, `get`)
//! - [`config`] - Optional generator configuration (`~/.vcat/config.toml`)
//! - [`core`] - Error types and the [`Section`](core::Section) model
//! - [`version`] - Version declarations and references
//!
//! # Example
//!
//! ```rust,no_run
//! use vcat_cli::catalog::Catalog;
//! use vcat_cli::config::GeneratorConfig;
//! use vcat_cli::manifest::CatalogFile;
//!
//! # fn main() -> anyhow::Result<()> {
//! let file = CatalogFile::load("gradle/libs.versions.toml".as_ref())?;
//! let catalog = Catalog::build(file.entries()?, &GeneratorConfig::default())?;
//!
//! let view = catalog.full_view();
//! assert_eq!(view.version_string("quarkus"), Some("2.13.5.Final"));
//! # Ok(())
//! # }
//! ```

pub mod alias;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod manifest;
pub mod naming;
pub mod tree;
pub mod version;
pub mod view;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
