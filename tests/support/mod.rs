//! Test support utilities for ssm-env integration tests.
//!
//! Provides an isolated working directory and helpers for running the
//! binary against a JSON fixture store.

#![allow(dead_code)]

pub mod assertions;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Fixture file handed to the binary via SSM_ENV_FIXTURE, if any
    pub fixture: Option<PathBuf>,
}

impl Test {
    /// Create a test environment with no parameter store.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir, fixture: None }
    }

    /// Create a test environment whose store holds `params`.
    pub fn with_parameters(params: &[(&str, &str)]) -> Self {
        let entries: Vec<serde_json::Value> = params
            .iter()
            .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
            .collect();
        Self::with_fixture(&serde_json::json!({ "parameters": entries }))
    }

    /// Create a test environment whose store holds SecureString parameters,
    /// given as (name, plaintext, ciphertext).
    pub fn with_secure_parameters(params: &[(&str, &str, &str)]) -> Self {
        let entries: Vec<serde_json::Value> = params
            .iter()
            .map(|(name, value, ciphertext)| {
                serde_json::json!({ "name": name, "value": value, "ciphertext": ciphertext })
            })
            .collect();
        Self::with_fixture(&serde_json::json!({ "parameters": entries }))
    }

    /// Create a test environment whose store rejects every request.
    pub fn with_store_error(message: &str) -> Self {
        Self::with_fixture(&serde_json::json!({ "error": message }))
    }

    fn with_fixture(doc: &serde_json::Value) -> Self {
        let mut t = Self::new();
        let path = t.dir.path().join("store.json");
        std::fs::write(&path, doc.to_string()).expect("failed to write fixture");
        t.fixture = Some(path);
        t
    }

    /// Path inside the working directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
