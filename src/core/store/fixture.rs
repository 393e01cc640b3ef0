//! JSON fixture backend.
//!
//! Serves parameters from a JSON file in fixed-size pages, filtering by path
//! the way SSM does. Used by integration tests through the `SSM_ENV_FIXTURE`
//! environment variable when built with `--features test-store`.
//!
//! ```json
//! {
//!   "parameters": [
//!     { "name": "/app/DB_HOST", "value": "10.0.0.1" },
//!     { "name": "/app/DB_PASS", "value": "hunter2", "ciphertext": "AQICAHh..." }
//!   ],
//!   "error": null
//! }
//! ```
//!
//! An entry with `ciphertext` is a SecureString: `value` is served when the
//! query decrypts, `ciphertext` when it does not. A non-null `error` makes
//! every request fail with that message.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use super::{Page, Parameter, ParameterStore, Query};
use crate::core::constants::{FIXTURE_PAGE_SIZE, PATH_SEPARATOR};
use crate::error::{Result, StoreError};

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    parameters: Vec<Entry>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Entry {
    name: String,
    value: String,
    #[serde(default)]
    ciphertext: Option<String>,
}

impl Entry {
    fn resolve(&self, decrypt: bool) -> Parameter {
        let value = match &self.ciphertext {
            Some(ciphertext) if !decrypt => ciphertext,
            _ => &self.value,
        };
        Parameter::new(self.name.as_str(), value.as_str())
    }
}

/// Parameter store backed by a JSON file.
#[derive(Debug)]
pub struct FixtureStore {
    parameters: Vec<Entry>,
    error: Option<String>,
    page_size: usize,
}

impl FixtureStore {
    /// Load a fixture file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the file is unreadable or malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading fixture store");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;
        let file: FixtureFile = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Fixture(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            parameters: file.parameters,
            error: file.error,
            page_size: FIXTURE_PAGE_SIZE,
        })
    }

    /// Build a store from parameters in memory.
    pub fn from_parameters(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters: parameters
                .into_iter()
                .map(|p| Entry {
                    name: p.name,
                    value: p.value,
                    ciphertext: None,
                })
                .collect(),
            error: None,
            page_size: FIXTURE_PAGE_SIZE,
        }
    }

    /// Add a SecureString parameter.
    pub fn with_secure(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        ciphertext: impl Into<String>,
    ) -> Self {
        self.parameters.push(Entry {
            name: name.into(),
            value: value.into(),
            ciphertext: Some(ciphertext.into()),
        });
        self
    }

    /// Override the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn matches(query: &Query, name: &str) -> bool {
        let prefix = query.path.trim_end_matches(PATH_SEPARATOR);
        let Some(rest) = name
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(PATH_SEPARATOR))
        else {
            return false;
        };
        query.recursive || !rest.contains(PATH_SEPARATOR)
    }
}

impl ParameterStore for FixtureStore {
    fn name(&self) -> &'static str {
        "fixture"
    }

    fn fetch_page(&self, query: &Query, cursor: Option<&str>) -> Result<Page> {
        if let Some(error) = &self.error {
            return Err(StoreError::Request(error.clone()).into());
        }

        let start = match cursor {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| StoreError::Request(format!("invalid next token: {}", token)))?,
            None => 0,
        };

        let matching: Vec<&Entry> = self
            .parameters
            .iter()
            .filter(|p| Self::matches(query, &p.name))
            .collect();

        let end = start.saturating_add(self.page_size).min(matching.len());
        let parameters = matching
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|entry| entry.resolve(query.decrypt))
            .collect();
        let next_token = (end < matching.len()).then(|| end.to_string());

        Ok(Page {
            parameters,
            next_token,
        })
    }
}
