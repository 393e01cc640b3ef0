//! ssm-env - render SSM Parameter Store paths as environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/                # Command-line interface
//! │   ├── render          # fetch → normalize → render → write
//! │   ├── completions     # Shell completions
//! │   └── output          # stderr diagnostics
//! └── core/               # Library components
//!     ├── domain          # EnvVar and the name normalizer
//!     ├── format          # docker / exports / elasticbeanstalk renderers
//!     ├── sink            # stdout or file destination
//!     └── store/          # Parameter store backends
//!         ├── mod         # ParameterStore trait, pagination loop
//!         ├── ssm         # AWS SSM implementation
//!         └── fixture     # JSON fixture (feature `test-store`)
//! ```
//!
//! # Example
//!
//! ```
//! use ssm_env::core::domain::{normalize_all, EnvVar};
//! use ssm_env::core::format::Format;
//! use ssm_env::core::store::Parameter;
//!
//! let vars = normalize_all(vec![
//!     Parameter::new("/app/DB_HOST", "10.0.0.1"),
//!     Parameter::new("/app/DB_PORT", "5432"),
//! ])
//! .unwrap();
//!
//! assert_eq!(Format::Docker.render(&vars), "DB_HOST=10.0.0.1\nDB_PORT=5432\n");
//! assert_eq!(vars[0], EnvVar::new("DB_HOST", "10.0.0.1"));
//! ```

pub mod cli;
pub mod core;
pub mod error;
