//! Shared helpers for the integration suite.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use vcat_cli::manifest::CATALOG_FILE_NAME;

/// A temporary project holding one catalog file.
pub struct TestProject {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        fs::create_dir_all(project_dir.join("gradle"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// Root of the project.
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Location of `gradle/libs.versions.toml`.
    pub fn catalog_path(&self) -> PathBuf {
        self.project_dir.join("gradle").join(CATALOG_FILE_NAME)
    }

    /// Write the catalog file.
    pub fn write_catalog(&self, content: &str) -> Result<PathBuf> {
        let path = self.catalog_path();
        fs::write(&path, content).with_context(|| format!("Failed to write catalog to {:?}", path))?;
        Ok(path)
    }

    /// Write a generator config file into the project.
    pub fn write_config(&self, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join("vcat.toml");
        fs::write(&path, content).with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(path)
    }

    /// Run vcat in the project directory.
    ///
    /// `HOME` points into the project so no user config is picked up.
    pub fn run_vcat(&self, args: &[&str]) -> Result<CommandOutput> {
        let vcat_binary = env!("CARGO_BIN_EXE_vcat");
        let output = Command::new(vcat_binary)
            .args(args)
            .current_dir(&self.project_dir)
            .env("HOME", &self.project_dir)
            .env_remove("VCAT_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .context("Failed to run vcat command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Captured output of one vcat run.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "Command failed with code {:?}\nStderr: {}",
            self.code, self.stderr
        );
        self
    }

    /// Assert the command failed with exit code 1
    pub fn assert_failure(&self) -> &Self {
        assert_eq!(self.code, Some(1), "Expected exit code 1\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(
            self.stdout.contains(text),
            "Expected stdout to contain '{}'\nActual stdout: {}",
            text,
            self.stdout
        );
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(
            self.stderr.contains(text),
            "Expected stderr to contain '{}'\nActual stderr: {}",
            text,
            self.stderr
        );
        self
    }
}
