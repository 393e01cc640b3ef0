//! Command-line interface.

pub mod completions;
pub mod output;
pub mod render;

use clap::Parser;
use std::path::PathBuf;

use crate::core::format::Format;

/// ssm-env - render SSM Parameter Store paths as environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "ssm-env",
    about = "Render SSM Parameter Store paths as environment variables",
    version,
    after_help = "Examples:\n  ssm-env -p /app/prod > app.env\n  eval \"$(ssm-env -p /app/prod -o exports)\"\n  ssm-env -p /app/prod -o elasticbeanstalk -f .ebextensions/env.config"
)]
pub struct Cli {
    /// Parameter path prefix to fetch (e.g., /app/prod)
    #[arg(
        short,
        long,
        env = "SSM_ENV_PATH",
        required_unless_present = "completions"
    )]
    pub path: Option<String>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = Format::Docker,
        env = "SSM_ENV_OUTPUT"
    )]
    pub output: Format,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Include parameters nested deeper than one level below the path
    #[arg(short, long)]
    pub recursive: bool,

    /// Leave SecureString values encrypted
    #[arg(long)]
    pub no_decrypt: bool,

    /// AWS region (defaults to the provider chain, e.g. AWS_REGION)
    #[arg(long)]
    pub region: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "path")]
    pub completions: Option<Shell>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.completions {
        Some(shell) => completions::execute(shell),
        None => render::execute(cli),
    }
}
