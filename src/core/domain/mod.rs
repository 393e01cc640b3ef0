//! Domain types.

mod env_var;

pub use env_var::{normalize_all, parse_name, EnvVar};
