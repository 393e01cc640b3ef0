//! Constants used throughout ssm-env.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SSM_ENV_LOG";

/// Environment variable that selects the JSON fixture store.
pub const FIXTURE_ENV: &str = "SSM_ENV_FIXTURE";

/// Separator between segments of a parameter path.
pub const PATH_SEPARATOR: char = '/';

/// First line of the Elastic Beanstalk rendering.
pub const EB_HEADER: &str = "option_settings";

/// Parameters per page served by the fixture store.
pub const FIXTURE_PAGE_SIZE: usize = 10;
