//! Restricted-access advisories.

use crate::core::Section;
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// A restricted accessor was used.
///
/// Advisories never block access; they are collected for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    /// Full dotted accessor path, starting with the catalog name
    pub path: String,
    /// Section the accessor belongs to
    pub section: Section,
    /// What to use instead, e.g. `versions or plugins`
    pub use_instead: String,
    /// Human readable message
    pub message: String,
}

impl Advisory {
    /// Kind tag of every advisory recorded by a view.
    pub const KIND: &'static str = "RestrictedAccessUsed";
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", Self::KIND, self.path, self.message)
    }
}

/// Shared, append-only advisory sink.
///
/// Clones share the same underlying list, so one log can be handed to several
/// views and inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryLog {
    inner: Arc<Mutex<Vec<Advisory>>>,
}

impl AdvisoryLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Advisory>> {
        // A panic while holding the lock cannot leave a half-pushed entry
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an advisory.
    pub fn record(&self, advisory: Advisory) {
        debug!(
            kind = Advisory::KIND,
            path = %advisory.path,
            section = %advisory.section,
            "restricted accessor used"
        );
        self.entries().push(advisory);
    }

    /// Copy of every advisory recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Advisory> {
        self.entries().clone()
    }

    /// Remove and return every recorded advisory.
    pub fn drain(&self) -> Vec<Advisory> {
        std::mem::take(&mut *self.entries())
    }

    /// Number of recorded advisories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
