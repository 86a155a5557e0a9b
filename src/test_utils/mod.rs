//! Test utilities for vcat
//!
//! Available to the crate's own tests and, through the `test-utils` feature,
//! to the integration suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use vcat_cli::catalog::Catalog;
//! use vcat_cli::config::GeneratorConfig;
//! use vcat_cli::test_utils::{fixtures, init_test_logging};
//!
//! init_test_logging(None);
//! let catalog = Catalog::build(fixtures::sample_entries(), &GeneratorConfig::default()).unwrap();
//! assert_eq!(catalog.versions().collisions(), 2);
//! ```

pub mod fixtures;

pub use fixtures::CatalogFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs the tracing subscriber once, however often it is called. Uses
/// `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=vcat_cli=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
