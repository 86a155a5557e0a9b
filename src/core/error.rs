//! Error handling for vcat
//!
//! This module provides the error types and user-friendly error reporting for the
//! catalog accessor compiler. The error system follows two principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`VcatError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds user-friendly details and suggestions
//!
//! # Error Categories
//!
//! - **Authoring errors** (fatal, abort tree construction):
//!   [`VcatError::DuplicateAlias`], [`VcatError::NamingCollision`],
//!   [`VcatError::InvalidAlias`], [`VcatError::ReservedAlias`],
//!   [`VcatError::UndefinedVersionReference`], [`VcatError::UndefinedBundleMember`]
//! - **Catalog file errors**: [`VcatError::CatalogNotFound`],
//!   [`VcatError::CatalogParseError`], [`VcatError::InvalidCatalogEntry`]
//! - **Configuration**: [`VcatError::ConfigError`], [`VcatError::ConfigNotFound`]
//!
//! Restricted accessor usage is deliberately *not* an error; it is recorded as
//! an [`Advisory`](crate::view::Advisory) and the access succeeds.
//!
//! # Examples
//!
//! ```rust,no_run
//! use vcat_cli::core::{VcatError, user_friendly_error};
//! use vcat_cli::core::Section;
//!
//! let error = VcatError::DuplicateAlias {
//!     section: Section::Libraries,
//!     alias: "io.quarkus.quarkus.agroal".to_string(),
//! };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use crate::core::Section;
use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for vcat operations
///
/// Every variant carries the dotted alias path (or file path) it refers to,
/// so that authoring errors can be traced back to the catalog line that caused
/// them.
#[derive(Error, Debug)]
pub enum VcatError {
    /// The same alias was declared twice in one section
    ///
    /// Sections are independent namespaces, so `foo` in `[libraries]` and `foo`
    /// in `[versions]` never conflict.
    #[error("Duplicate alias '{alias}' in {section}")]
    DuplicateAlias {
        /// Section holding both declarations
        section: Section,
        /// The dotted alias declared twice
        alias: String,
    },

    /// Two sibling segments normalize to the same accessor identifier
    ///
    /// For example `service-binding` and `service_binding` under the same
    /// parent would both become `serviceBinding`.
    #[error(
        "Naming collision in {section} at '{parent}': '{first}' and '{second}' both map to accessor '{identifier}'"
    )]
    NamingCollision {
        /// Section where the collision occurred
        section: Section,
        /// Dotted path of the parent group (empty for the section root)
        parent: String,
        /// First colliding segment, in insertion order
        first: String,
        /// Second colliding segment
        second: String,
        /// The identifier both segments normalize to
        identifier: String,
    },

    /// Alias does not follow the alias syntax
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias {
        /// The rejected alias
        alias: String,
        /// Why it was rejected
        reason: String,
    },

    /// Library alias starts with a name reserved by the catalog root
    #[error("Alias '{alias}' is not allowed: '{reserved}' is a reserved catalog accessor")]
    ReservedAlias {
        /// The rejected alias
        alias: String,
        /// The reserved first segment
        reserved: String,
    },

    /// A `version.ref` points at a version alias that was never declared
    #[error("{section} alias '{alias}' references undefined version '{reference}'")]
    UndefinedVersionReference {
        /// Section of the referencing alias
        section: Section,
        /// The referencing alias
        alias: String,
        /// The missing version alias
        reference: String,
    },

    /// A bundle lists a library alias that was never declared
    #[error("Bundle '{bundle}' references undefined library '{member}'")]
    UndefinedBundleMember {
        /// The bundle alias
        bundle: String,
        /// The missing library alias
        member: String,
    },

    /// A catalog entry has a malformed value
    #[error("Invalid {section} entry '{alias}': {reason}")]
    InvalidCatalogEntry {
        /// Section of the entry
        section: Section,
        /// Alias of the entry
        alias: String,
        /// What is wrong with the value
        reason: String,
    },

    /// Unknown section name
    #[error("Invalid catalog section: {name}")]
    InvalidSection {
        /// The unrecognized name
        name: String,
    },

    /// Catalog file does not exist
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// Path that was looked up
        path: String,
    },

    /// Catalog file is not valid TOML or has an unexpected shape
    #[error("Invalid catalog file syntax in {file}")]
    CatalogParseError {
        /// Path to the catalog file
        file: String,
        /// Specific reason for the parsing failure
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Config file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the configuration file that was not found
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for VcatError {
    fn clone(&self) -> Self {
        match self {
            Self::DuplicateAlias {
                section,
                alias,
            } => Self::DuplicateAlias {
                section: *section,
                alias: alias.clone(),
            },
            Self::NamingCollision {
                section,
                parent,
                first,
                second,
                identifier,
            } => Self::NamingCollision {
                section: *section,
                parent: parent.clone(),
                first: first.clone(),
                second: second.clone(),
                identifier: identifier.clone(),
            },
            Self::InvalidAlias {
                alias,
                reason,
            } => Self::InvalidAlias {
                alias: alias.clone(),
                reason: reason.clone(),
            },
            Self::ReservedAlias {
                alias,
                reserved,
            } => Self::ReservedAlias {
                alias: alias.clone(),
                reserved: reserved.clone(),
            },
            Self::UndefinedVersionReference {
                section,
                alias,
                reference,
            } => Self::UndefinedVersionReference {
                section: *section,
                alias: alias.clone(),
                reference: reference.clone(),
            },
            Self::UndefinedBundleMember {
                bundle,
                member,
            } => Self::UndefinedBundleMember {
                bundle: bundle.clone(),
                member: member.clone(),
            },
            Self::InvalidCatalogEntry {
                section,
                alias,
                reason,
            } => Self::InvalidCatalogEntry {
                section: *section,
                alias: alias.clone(),
                reason: reason.clone(),
            },
            Self::InvalidSection {
                name,
            } => Self::InvalidSection {
                name: name.clone(),
            },
            Self::CatalogNotFound {
                path,
            } => Self::CatalogNotFound {
                path: path.clone(),
            },
            Self::CatalogParseError {
                file,
                reason,
            } => Self::CatalogParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::ConfigNotFound {
                path,
            } => Self::ConfigNotFound {
                path: path.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`VcatError`] and adds optional suggestions for
/// resolution and additional details. This is how the CLI presents errors.
///
/// # Examples
///
/// ```rust,no_run
/// use vcat_cli::core::{ErrorContext, VcatError};
///
/// let context = ErrorContext::new(VcatError::CatalogNotFound { path: "libs.versions.toml".into() })
///     .with_suggestion("Pass the path to your catalog file")
///     .with_details("vcat reads catalogs in the libs.versions.toml format");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: VcatError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: VcatError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`VcatError`] anywhere in the chain, [`std::io::Error`] and
/// [`toml::de::Error`]; anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(vcat_error) = error.chain().find_map(|cause| cause.downcast_ref::<VcatError>()) {
        return create_error_context(vcat_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(VcatError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check that you can read the catalog and configuration files")
                .with_details("vcat only reads files; it never writes to the catalog directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(VcatError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(VcatError::CatalogParseError {
            file: "libs.versions.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of the catalog. Verify quotes, brackets, and inline tables")
        .with_details("TOML parsing errors are usually caused by missing quotes or mismatched brackets");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(VcatError::Other {
        message,
    })
}

/// Map each [`VcatError`] variant to an [`ErrorContext`] with tailored suggestions.
fn create_error_context(error: VcatError) -> ErrorContext {
    match &error {
        VcatError::DuplicateAlias { section, alias } => {
            let (section, alias) = (*section, alias.clone());
            ErrorContext::new(error)
                .with_suggestion(format!("Remove or rename one of the '{alias}' entries in [{section}]"))
                .with_details("Each alias may be declared once per section; accessor chains must map to exactly one value")
        }

        VcatError::NamingCollision { identifier, first, second, .. } => {
            let details = format!(
                "'{first}' and '{second}' differ only in separators or case, so both would be exposed as '{identifier}'"
            );
            ErrorContext::new(error)
                .with_suggestion("Rename one of the aliases so their accessor names differ")
                .with_details(details)
        }

        VcatError::InvalidAlias { .. } => ErrorContext::new(error)
            .with_suggestion("Use dot-separated segments of letters and digits, joined within a segment by '-' or '_' (e.g. 'io.quarkus.resteasy-jackson')")
            .with_details("Aliases must start with a lowercase letter and every segment must start with a letter"),

        VcatError::ReservedAlias { reserved, .. } => {
            let details = format!(
                "Library groups are exposed at the catalog root, where '{reserved}' already names a section accessor"
            );
            ErrorContext::new(error)
                .with_suggestion("Prefix the library alias with a different group name")
                .with_details(details)
        }

        VcatError::UndefinedVersionReference { reference, .. } => {
            let suggestion = format!("Declare '{reference}' in the [versions] table or fix the version.ref");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        VcatError::UndefinedBundleMember { member, .. } => {
            let suggestion = format!("Declare '{member}' in the [libraries] table or remove it from the bundle");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        VcatError::CatalogNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Pass the path to a catalog file, e.g. 'vcat check gradle/libs.versions.toml'"),

        VcatError::CatalogParseError { file, reason } => {
            let suggestion = format!(
                "Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets, invalid characters"
            );
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(suggestion).with_details(details)
        }

        VcatError::ConfigNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Create the configuration file or omit --config to use defaults"),

        _ => ErrorContext::new(error),
    }
}
