//! Accessor identifier naming
//!
//! Every alias segment becomes a lower-camel accessor identifier and every
//! group node gets an upper-camel type name derived from its full path:
//!
//! | Segment            | Accessor          |
//! |--------------------|-------------------|
//! | `quarkus`          | `quarkus`         |
//! | `resteasy-jackson` | `resteasyJackson` |
//! | `jdbc_postgresql`  | `jdbcPostgresql`  |
//! | `http2`            | `http2`           |
//!
//! Normalization is not injective (`service-binding`, `service_binding` and
//! `serviceBinding` all become `serviceBinding`), so identifiers are claimed
//! per sibling set through [`SiblingNames`], which reports the first clash as a
//! [`VcatError::NamingCollision`].

use crate::core::{Result, Section, VcatError};
use heck::{ToLowerCamelCase, ToUpperCamelCase};
use std::collections::HashMap;

/// Accessor identifier for one alias segment.
///
/// ```rust
/// use vcat_cli::naming::name;
///
/// assert_eq!(name("resteasy-jackson"), "resteasyJackson");
/// assert_eq!(name("service_binding"), "serviceBinding");
/// assert_eq!(name("agroal"), "agroal");
/// ```
#[must_use]
pub fn name(segment: &str) -> String {
    segment.to_lower_camel_case()
}

/// Type name of the group node at `path` in `section`.
///
/// ```rust
/// use vcat_cli::core::Section;
/// use vcat_cli::naming::type_name;
///
/// assert_eq!(
///     type_name(Section::Libraries, &["io", "quarkus", "quarkus"]),
///     "IoQuarkusQuarkusLibraryAccessors"
/// );
/// assert_eq!(type_name(Section::Versions, &[] as &[&str]), "VersionAccessors");
/// ```
#[must_use]
pub fn type_name<S: AsRef<str>>(section: Section, path: &[S]) -> String {
    let mut name: String = path.iter().map(|segment| segment.as_ref().to_upper_camel_case()).collect();
    name.push_str(section.type_suffix());
    name
}

/// Whether `candidate` can be used verbatim as an accessor identifier.
///
/// ```rust
/// use vcat_cli::naming::is_identifier;
///
/// assert!(is_identifier("asProvider"));
/// assert!(!is_identifier("as-provider"));
/// assert!(!is_identifier("AsProvider"));
/// ```
#[must_use]
pub fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Identifiers claimed within one sibling set.
#[derive(Debug)]
pub struct SiblingNames<'a> {
    section: Section,
    parent: &'a str,
    claimed: HashMap<String, String>,
}

impl<'a> SiblingNames<'a> {
    /// Empty sibling set under the group at dotted `parent` path.
    #[must_use]
    pub fn new(section: Section, parent: &'a str) -> Self {
        Self {
            section,
            parent,
            claimed: HashMap::new(),
        }
    }

    /// Name `segment` and claim the resulting identifier.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::NamingCollision`] when a different segment already
    /// claimed the same identifier.
    pub fn claim(&mut self, segment: &str) -> Result<String> {
        let identifier = name(segment);
        self.reserve(segment, identifier.clone())?;
        Ok(identifier)
    }

    /// Claim an identifier that is not derived from a segment, such as the
    /// direct-value accessor of a node that is also a group.
    ///
    /// # Errors
    ///
    /// Returns [`VcatError::NamingCollision`] when the identifier is taken.
    pub fn reserve(&mut self, origin: &str, identifier: String) -> Result<()> {
        if let Some(existing) = self.claimed.get(&identifier) {
            return Err(VcatError::NamingCollision {
                section: self.section,
                parent: self.parent.to_string(),
                first: existing.clone(),
                second: origin.to_string(),
                identifier,
            });
        }
        self.claimed.insert(identifier, origin.to_string());
        Ok(())
    }
}
