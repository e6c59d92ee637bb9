//! Test support utilities for liftkit integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod plane;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use plane::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. Child processes use
/// `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a test environment with `liftkit.toml` written.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        t.write("liftkit.toml", contents);
        t
    }

    /// Path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a file inside the working directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path(name), contents).expect("failed to write file");
    }

    /// Read a file inside the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }
}
