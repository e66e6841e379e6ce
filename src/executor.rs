use crate::actions::delete_path::{self, PathOutcome};
use crate::config::NotificationConfig;
use crate::diagnostics::{DiagnosticsSink, TracingSink};
use crate::fs::{FileSystem, LocalFileSystem};
use crate::listener::{CallbackListener, DELETE_TASK_SOURCE};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RemovalSummary {
    pub removed: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RemovalSummary {
    fn record(&mut self, outcome: PathOutcome) {
        match outcome {
            PathOutcome::RemovedFile | PathOutcome::RemovedDirectory => self.removed += 1,
            PathOutcome::Missing => self.missing += 1,
            PathOutcome::FileFailed | PathOutcome::DirectoryFailed => self.failed += 1,
        }
    }
}

/// Deletes batches of paths on a blocking worker and notifies a listener
/// before and after.
pub struct Remover {
    fs: Arc<dyn FileSystem>,
    diagnostics: Arc<dyn DiagnosticsSink>,
    notification: NotificationConfig,
}

impl Remover {
    pub fn new(notification: NotificationConfig) -> Self {
        Self {
            fs: Arc::new(LocalFileSystem),
            diagnostics: Arc::new(TracingSink),
            notification,
        }
    }

    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Removes every path in `paths`, in order.
    ///
    /// `update_views` runs before any deletion and `on_event` after all of
    /// them, both on the awaiting task. The event parameter is always the
    /// first input path (empty string for an empty batch), whatever happened
    /// to the individual deletions. Paths are deleted as given; only the
    /// event parameter is rendered as text.
    pub async fn remove<P>(&self, paths: &[P], listener: &dyn CallbackListener)
    where
        P: AsRef<Path> + Sync,
    {
        listener.update_views(
            &self.notification.message_key,
            self.notification.text_visibility,
            self.notification.progress_visibility,
        );

        let location = paths
            .first()
            .map(|p| p.as_ref().display().to_string())
            .unwrap_or_default();
        let batch: Vec<PathBuf> = paths.iter().map(|p| p.as_ref().to_path_buf()).collect();
        let fs = Arc::clone(&self.fs);
        let diagnostics = Arc::clone(&self.diagnostics);

        let worker = tokio::task::spawn_blocking(move || {
            remove_batch(fs.as_ref(), diagnostics.as_ref(), &batch)
        });
        match worker.await {
            Ok(summary) => tracing::info!(
                removed = summary.removed,
                missing = summary.missing,
                failed = summary.failed,
                "Finished removing {} path(s)",
                paths.len()
            ),
            Err(e) => tracing::error!("Removal worker did not complete: {}", e),
        }

        listener.on_event(DELETE_TASK_SOURCE, &location);
    }
}

fn remove_batch(
    fs: &dyn FileSystem,
    diagnostics: &dyn DiagnosticsSink,
    batch: &[PathBuf],
) -> RemovalSummary {
    let mut summary = RemovalSummary::default();
    for path in batch {
        let outcome = delete_path::execute(fs, diagnostics, path);
        tracing::debug!("{}: {:?}", path.display(), outcome);
        summary.record(outcome);
    }
    summary
}
