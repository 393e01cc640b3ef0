//! Core library components.
//!
//! Fetching parameters, turning them into environment variables, and
//! rendering those variables as text.

pub mod constants;
pub mod domain;
pub mod format;
pub mod sink;
pub mod store;
