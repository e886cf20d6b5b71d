//! Test support utilities for smei integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to the temp dir and
/// `SMEI_MOCK_STORE` pointing at `store.json` inside it, so tests can run in
/// parallel without touching the process environment.
pub struct Test {
    /// Temporary working directory for the child process
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment whose mock store holds `secrets`.
    ///
    /// Each entry is a secret name and its raw secret string.
    pub fn with_store(secrets: &[(&str, &str)]) -> Self {
        let t = Self::new();
        t.write_store(secrets);
        t
    }

    /// Path of the mock store file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    /// Write the mock store file.
    pub fn write_store(&self, secrets: &[(&str, &str)]) {
        let map: serde_json::Map<String, serde_json::Value> = secrets
            .iter()
            .map(|(name, payload)| (name.to_string(), serde_json::Value::from(*payload)))
            .collect();
        std::fs::write(
            self.store_path(),
            serde_json::to_string(&map).expect("failed to serialize store"),
        )
        .expect("failed to write mock store");
    }

    /// Write `.smei.toml` in the test directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".smei.toml"), contents)
            .expect("failed to write config");
    }
}
