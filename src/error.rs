use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures forwarded to the diagnostics sink while removing paths.
#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("Failed to delete directory: {}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RemoveError {
    pub fn path(&self) -> &PathBuf {
        match self {
            RemoveError::Directory { path, .. } => path,
        }
    }
}
