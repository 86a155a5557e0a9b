//! Integration test suite for vcat
//!
//! End-to-end tests that run the `vcat` binary against catalogs written into
//! temporary directories, plus tests of the public library API.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **catalog**: Compiling catalogs and navigating views through the library API
//! - **cli**: The `check`, `tree` and `get` commands, exit codes and error output

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod catalog;
mod cli;
