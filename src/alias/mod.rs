//! Alias keys and catalog entries
//!
//! An alias is the dotted name a catalog author gives to a dependency
//! coordinate, a version, a bundle or a plugin. Each `.` starts a new level of
//! the accessor tree, so `io.quarkus.quarkus.agroal` becomes the chain
//! `io` → `quarkus` → `quarkus` → `agroal`.
//!
//! # Alias Syntax
//!
//! - Segments are separated by `.` and may not be empty
//! - A segment is one or more tokens of ASCII letters and digits joined by a
//!   single `-` or `_` (`resteasy-jackson`, `http2`, `jdbc_postgresql`)
//! - Every segment starts with a letter
//! - The alias as a whole starts with a lowercase letter
//!
//! ```rust
//! use vcat_cli::alias::AliasKey;
//!
//! let key = AliasKey::parse("io.quarkus.resteasy-jackson").unwrap();
//! assert_eq!(key.segments(), ["io", "quarkus", "resteasy-jackson"]);
//!
//! assert!(AliasKey::parse("io..quarkus").is_err());
//! assert!(AliasKey::parse("Io.quarkus").is_err());
//! assert!(AliasKey::parse("io.2fa").is_err());
//! ```

mod entry;

pub use entry::{AliasEntry, BundleSpec, LibraryCoordinate, Payload, PluginSpec};
pub(crate) use entry::check_reserved;

use crate::core::{Result, VcatError};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*([-_][A-Za-z0-9]+)*$").expect("segment pattern is valid")
});

/// A validated, dot-delimited alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasKey {
    raw: String,
    segments: Vec<String>,
}

impl AliasKey {
    /// Parse and validate a dotted alias.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::InvalidAlias`] naming the offending segment.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: String| VcatError::InvalidAlias {
            alias: raw.to_string(),
            reason,
        };

        if raw.is_empty() {
            return Err(invalid("alias is empty".to_string()));
        }
        if !raw.starts_with(|c: char| c.is_ascii_lowercase()) {
            return Err(invalid("aliases must start with a lowercase letter".to_string()));
        }

        let mut segments = Vec::new();
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(invalid("empty segment (leading, trailing or doubled '.')".to_string()));
            }
            if !SEGMENT.is_match(segment) {
                return Err(invalid(format!(
                    "segment '{segment}' must start with a letter and contain only letters and digits, \
                     joined by single '-' or '_'"
                )));
            }
            segments.push(segment.to_string());
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The alias as declared.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment (the top-level group).
    #[must_use]
    pub fn first(&self) -> &str {
        &self.segments[0]
    }

    /// Last segment (the accessor that exposes the value).
    #[must_use]
    pub fn leaf(&self) -> &str {
        &self.segments[self.segments.len() - 1]
    }
}

impl FromStr for AliasKey {
    type Err = VcatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AliasKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for AliasKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}
