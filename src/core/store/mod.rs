//! Parameter store backends.
//!
//! A [`ParameterStore`] serves one page of parameters at a time; [`fetch_all`]
//! drives the pagination loop until the store reports no further pages.
//!
//! ## Backends
//!
//! - **ssm**: AWS Systems Manager Parameter Store via `aws-sdk-ssm`.
//! - **fixture**: Feature-gated (`test-store`). Parameters read from a JSON
//!   file, for exercising the CLI without AWS.

use tracing::debug;

use crate::error::{Result, StoreError};

#[cfg(feature = "test-store")]
pub mod fixture;
pub mod ssm;

#[cfg(feature = "test-store")]
pub use fixture::FixtureStore;
pub use ssm::SsmStore;

/// A parameter as returned by the store, with its full hierarchical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub parameters: Vec<Parameter>,
    /// Cursor for the next page; `None` on the last page.
    pub next_token: Option<String>,
}

/// What to fetch.
#[derive(Debug, Clone)]
pub struct Query {
    /// Path prefix, e.g. `/app/prod`
    pub path: String,
    /// Include parameters nested more than one level below `path`
    pub recursive: bool,
    /// Decrypt SecureString values
    pub decrypt: bool,
}

impl Query {
    /// Query a single level below `path`, decrypting values.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            decrypt: true,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn decrypt(mut self, decrypt: bool) -> Self {
        self.decrypt = decrypt;
        self
    }
}

/// A paginated source of parameters.
///
/// Implementations perform exactly one request per call and never retry;
/// failures are surfaced as [`StoreError`].
pub trait ParameterStore {
    /// Backend name for logging.
    fn name(&self) -> &'static str;

    /// Region the backend talks to, if it has one.
    fn region(&self) -> Option<&str> {
        None
    }

    /// Fetch the page starting at `cursor`, or the first page if `None`.
    fn fetch_page(&self, query: &Query, cursor: Option<&str>) -> Result<Page>;
}

/// Fetch every parameter matching `query`, following page tokens.
///
/// Parameters are returned in the order the store yields them. An empty
/// result is not an error.
///
/// # Errors
///
/// Returns `StoreError::EmptyPath` before any request if the path is empty,
/// `StoreError::CursorLoop` if the store hands back a token it already
/// returned, and propagates any error from the store itself.
pub fn fetch_all(store: &dyn ParameterStore, query: &Query) -> Result<Vec<Parameter>> {
    if query.path.is_empty() {
        return Err(StoreError::EmptyPath.into());
    }

    debug!(
        store = store.name(),
        region = store.region().unwrap_or("-"),
        path = %query.path,
        recursive = query.recursive,
        decrypt = query.decrypt,
        "fetching parameters"
    );

    let mut parameters = Vec::new();
    let mut seen_tokens: Vec<String> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = store.fetch_page(query, cursor.as_deref())?;
        debug!(
            count = page.parameters.len(),
            more = page.next_token.is_some(),
            "received page"
        );
        parameters.extend(page.parameters);

        match page.next_token {
            Some(token) => {
                if seen_tokens.contains(&token) {
                    return Err(StoreError::CursorLoop(token).into());
                }
                seen_tokens.push(token.clone());
                cursor = Some(token);
            }
            None => break,
        }
    }

    debug!(total = parameters.len(), "fetch complete");
    Ok(parameters)
}
