//! Core types for vcat
//!
//! This module holds the foundation shared by every compiler stage: the error
//! system and the catalog section model.
//!
//! # Modules
//!
//! ## `error` - Error Handling
//!
//! - [`VcatError`] - Enumerated error types covering every failure mode
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format
//!
//! ## `section` - Catalog Sections
//!
//! - [`Section`] - The four independent alias namespaces of a catalog
//!
//! # Error Handling Pattern
//!
//! Compiler stages return `Result<T, VcatError>` so callers can match on the
//! precise authoring error. The loader and CLI wrap those in [`anyhow::Error`]
//! with added context, and `main` turns whatever comes back into an
//! [`ErrorContext`] for display.
//!
//! ```rust,no_run
//! use vcat_cli::core::{Section, VcatError, user_friendly_error};
//!
//! fn build() -> anyhow::Result<()> {
//!     Err(VcatError::DuplicateAlias {
//!         section: Section::Versions,
//!         alias: "quarkus".into(),
//!     }
//!     .into())
//! }
//!
//! if let Err(e) = build() {
//!     user_friendly_error(e).display();
//! }
//! ```

pub mod error;
pub mod section;

pub use error::{ErrorContext, VcatError, user_friendly_error};
pub use section::Section;

/// Result alias used by the compiler stages.
pub type Result<T, E = VcatError> = std::result::Result<T, E>;
