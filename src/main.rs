//! ssm-env - render SSM Parameter Store paths as environment variables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssm_env::cli::output;
use ssm_env::cli::{execute, Cli};
use ssm_env::core::constants::LOG_ENV;
use ssm_env::error::{Error, NameError, StoreError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only rendered output.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ssm_env=debug")
        } else {
            EnvFilter::new("ssm_env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Store(StoreError::Request(_)) => {
                Some("check AWS credentials, region, and ssm:GetParametersByPath permission")
            }
            Error::Store(StoreError::EmptyPath) => Some("pass a path such as: ssm-env -p /app/prod"),
            Error::Name(NameError::MissingSeparator(_)) | Error::Name(NameError::Empty(_)) => {
                Some("parameter names must look like /path/NAME")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
