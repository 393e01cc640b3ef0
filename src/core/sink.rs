//! Output destinations for rendered text.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    /// Stdout unless a path is given.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Write the full text to this destination.
    ///
    /// Files are created or truncated. On Unix they are restricted to the
    /// owner (0600), since values may be decrypted secrets.
    ///
    /// # Errors
    ///
    /// Returns `OutputError` if the destination cannot be written.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(OutputError::Stdout)?;
            }
            Self::File(path) => {
                write_file(path, text).map_err(|source| OutputError::Write {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = text.len(), "wrote output file");
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;

        // mode() only applies to newly created files.
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, text)?;
    }

    Ok(())
}
