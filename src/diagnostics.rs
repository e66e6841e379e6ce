use crate::error::RemoveError;

/// Fire-and-forget error reporting. Called from the worker thread.
pub trait DiagnosticsSink: Send + Sync {
    fn notify(&self, error: &RemoveError);
}

/// Default sink: reports through `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn notify(&self, error: &RemoveError) {
        let cause = std::error::Error::source(error)
            .map(|s| s.to_string())
            .unwrap_or_default();
        tracing::error!(path = %error.path().display(), cause = %cause, "{}", error);
    }
}
