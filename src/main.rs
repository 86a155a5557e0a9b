//! vcat CLI entry point
//!
//! Parses arguments, runs the command and prints failures with context and
//! suggestions.
//!
//! - `check` - Validate a catalog and summarize its accessor trees
//! - `tree` - Display accessor trees
//! - `get` - Resolve one accessor path

use anyhow::Result;
use clap::Parser;
use vcat_cli::cli;
use vcat_cli::core::error::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
