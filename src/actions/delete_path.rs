use crate::diagnostics::DiagnosticsSink;
use crate::error::RemoveError;
use crate::fs::FileSystem;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOutcome {
    Missing,
    RemovedFile,
    RemovedDirectory,
    FileFailed,
    DirectoryFailed,
}

/// Removes a single path. Never fails: file errors are dropped, directory
/// errors go to the diagnostics sink.
pub fn execute(fs: &dyn FileSystem, sink: &dyn DiagnosticsSink, path: &Path) -> PathOutcome {
    if !fs.exists(path) {
        tracing::debug!("Skipping missing path '{}'", path.display());
        return PathOutcome::Missing;
    }
    if fs.is_dir(path) {
        match fs.remove_dir_all(path) {
            Ok(()) => PathOutcome::RemovedDirectory,
            Err(source) => {
                sink.notify(&RemoveError::Directory {
                    path: path.to_path_buf(),
                    source,
                });
                PathOutcome::DirectoryFailed
            }
        }
    } else {
        match fs.remove_file(path) {
            Ok(()) => PathOutcome::RemovedFile,
            Err(e) => {
                tracing::debug!("Ignoring failure to delete file '{}': {}", path.display(), e);
                PathOutcome::FileFailed
            }
        }
    }
}
