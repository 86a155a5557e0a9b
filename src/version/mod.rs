//! Version specifications for catalog entries
//!
//! A catalog version is either a plain string (`"2.13.5.Final"`) or a *rich*
//! version built from several constraints:
//!
//! | Field       | Meaning                                                  |
//! |-------------|----------------------------------------------------------|
//! | `strictly`  | Only versions matching this selector are acceptable      |
//! | `require`   | At least this version (the plain-string form sets this)  |
//! | `prefer`    | Preferred version when the constraints leave a choice    |
//! | `reject`    | Versions that must never be selected                     |
//! | `rejectAll` | Reject every version (used to forbid a dependency)       |
//!
//! Rich versions are a normal authoring pattern. Asking for one as a single
//! string therefore never fails; [`VersionSpec::single_version`] returns `None`
//! when the constraints don't reduce to exactly one concrete version.
//!
//! # Examples
//!
//! ```rust
//! use vcat_cli::version::VersionSpec;
//!
//! let plain = VersionSpec::required("2.13.5.Final");
//! assert_eq!(plain.single_version(), Some("2.13.5.Final"));
//!
//! let rich = VersionSpec {
//!     strictly: Some("[3.8, 4.0[".to_string()),
//!     prefer: Some("3.9".to_string()),
//!     ..VersionSpec::default()
//! };
//! assert_eq!(rich.single_version(), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A plain or rich version declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VersionSpec {
    /// Strict selector; nothing outside it is acceptable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strictly: Option<String>,

    /// Required version; the plain-string form populates this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require: Option<String>,

    /// Preferred version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer: Option<String>,

    /// Rejected versions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reject: Vec<String>,

    /// Reject every version
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reject_all: bool,
}

impl VersionSpec {
    /// Plain version: equivalent to `{ require = version }`.
    #[must_use]
    pub fn required(version: impl Into<String>) -> Self {
        Self {
            require: Some(version.into()),
            ..Self::default()
        }
    }

    /// True when no constraint at all is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strictly.is_none()
            && self.require.is_none()
            && self.prefer.is_none()
            && self.reject.is_empty()
            && !self.reject_all
    }

    /// True when this is the plain-string form.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.require.is_some()
            && self.strictly.is_none()
            && self.prefer.is_none()
            && self.reject.is_empty()
            && !self.reject_all
    }

    /// The single concrete version this specification allows, if any.
    ///
    /// Returns `Some` only when every populated selector (`strictly`,
    /// `require`, `prefer`) names the same concrete version and nothing is
    /// rejected. Ranges and dynamic selectors such as `1.+` or
    /// `latest.release` allow more than one version and yield `None`.
    #[must_use]
    pub fn single_version(&self) -> Option<&str> {
        if self.reject_all || !self.reject.is_empty() {
            return None;
        }

        let mut selectors =
            [&self.strictly, &self.require, &self.prefer].into_iter().flatten();
        let first = selectors.next()?;
        if selectors.any(|other| other != first) || is_dynamic(first) {
            return None;
        }
        Some(first.as_str())
    }
}

/// Whether a selector can match more than one version.
///
/// ```rust
/// use vcat_cli::version::is_dynamic;
///
/// assert!(is_dynamic("[1.0,2.0)"));
/// assert!(is_dynamic("1.+"));
/// assert!(is_dynamic("latest.release"));
/// assert!(!is_dynamic("2.13.5.Final"));
/// ```
#[must_use]
pub fn is_dynamic(selector: &str) -> bool {
    let selector = selector.trim();
    selector.is_empty()
        || selector.starts_with('[')
        || selector.starts_with(']')
        || selector.starts_with('(')
        || selector.ends_with('+')
        || selector.starts_with("latest.")
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_plain()
            && let Some(require) = &self.require
        {
            return f.write_str(require);
        }

        let mut parts = Vec::new();
        if let Some(strictly) = &self.strictly {
            parts.push(format!("strictly {strictly}"));
        }
        if let Some(require) = &self.require {
            parts.push(format!("require {require}"));
        }
        if let Some(prefer) = &self.prefer {
            parts.push(format!("prefer {prefer}"));
        }
        if self.reject_all {
            parts.push("reject all".to_string());
        } else if !self.reject.is_empty() {
            parts.push(format!("reject {}", self.reject.join(" | ")));
        }
        write!(f, "{{{}}}", parts.join("; "))
    }
}

/// How a library or plugin entry obtains its version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum VersionBinding {
    /// No version; resolution is left to platforms or constraints elsewhere
    #[default]
    Unspecified,

    /// `version.ref`: the name of a `[versions]` alias
    Reference(String),

    /// A version declared inline on the entry
    Declared(VersionSpec),
}

impl VersionBinding {
    /// The referenced version alias, if this binding is a reference.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            VersionBinding::Reference(alias) => Some(alias),
            _ => None,
        }
    }
}

impl fmt::Display for VersionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBinding::Unspecified => f.write_str("without version"),
            VersionBinding::Reference(alias) => write!(f, "with version reference {alias}"),
            VersionBinding::Declared(spec) => write!(f, "with version {spec}"),
        }
    }
}
