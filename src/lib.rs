//! Background removal of file-system paths with listener notifications.

pub mod actions;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod fs;
pub mod listener;
pub mod logging;

pub use config::{Config, NotificationConfig};
pub use diagnostics::{DiagnosticsSink, TracingSink};
pub use error::RemoveError;
pub use executor::Remover;
pub use fs::{FileSystem, LocalFileSystem};
pub use listener::{CallbackListener, ConsoleListener, Visibility, DELETE_TASK_SOURCE};
