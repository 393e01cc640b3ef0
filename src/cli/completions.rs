//! Shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;
use std::io::Write;

use crate::cli::{Cli, Shell};
use crate::error::{OutputError, Result};

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(CompletionShell::from(shell), &mut cmd, "ssm-env", out);
}

/// Print the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    generate(shell, &mut stdout);
    stdout.flush().map_err(OutputError::Stdout)?;
    Ok(())
}
