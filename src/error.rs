//! Error types.
//!
//! Each layer has its own error enum; [`Error`] wraps them so callers can
//! propagate with `?` and still match on the specific cause.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Failures while reading from the parameter store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("parameter path must not be empty")]
    EmptyPath,

    #[error("parameter store request failed: {0}")]
    Request(String),

    #[error("parameter store returned the same page token twice: {0}")]
    CursorLoop(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("fixture error: {0}")]
    Fixture(String),
}

/// A parameter key that cannot be turned into a variable name.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("parameter name has no '/' separator: {0}")]
    MissingSeparator(String),

    #[error("parameter name ends with '/': {0}")]
    Empty(String),
}

/// Failures while writing rendered output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Unrecognized output format name.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown output format: {0} (expected docker, exports, or elasticbeanstalk)")]
pub struct UnknownFormat(pub String);

pub type Result<T, E = Error> = std::result::Result<T, E>;
