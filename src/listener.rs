use colored::*;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::sync::Mutex;

/// Source tag carried by the post-completion event.
pub const DELETE_TASK_SOURCE: &str = "DeleteTask";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Invisible,
    Gone,
}

/// Presentation-side capability notified before and after a removal.
///
/// The remover only borrows the listener; both methods are invoked on the
/// task that awaits [`crate::executor::Remover::remove`].
pub trait CallbackListener: Send + Sync {
    fn update_views(
        &self,
        message_key: &str,
        text_visibility: Visibility,
        progress_visibility: Visibility,
    );

    fn on_event(&self, source: &str, param: &str);
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ListenerEvent {
    UpdateViews {
        message_key: String,
        text_visibility: Visibility,
        progress_visibility: Visibility,
    },
    Event {
        source: String,
        param: String,
    },
}

/// Listener used by the command line front end.
pub struct ConsoleListener<W: Write + Send = io::Stdout> {
    json: bool,
    out: Mutex<W>,
}

impl ConsoleListener {
    pub fn new(json: bool) -> Self {
        Self::with_writer(json, io::stdout())
    }
}

impl<W: Write + Send> ConsoleListener<W> {
    pub fn with_writer(json: bool, out: W) -> Self {
        Self {
            json,
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::warn!("Failed to write listener output: {}", e);
        }
    }

    fn write_json(&self, event: &ListenerEvent) {
        match serde_json::to_string(event) {
            Ok(line) => self.write_line(&line),
            Err(e) => tracing::warn!("Failed to serialize listener event: {}", e),
        }
    }
}

impl<W: Write + Send> CallbackListener for ConsoleListener<W> {
    fn update_views(
        &self,
        message_key: &str,
        text_visibility: Visibility,
        progress_visibility: Visibility,
    ) {
        if self.json {
            self.write_json(&ListenerEvent::UpdateViews {
                message_key: message_key.to_string(),
                text_visibility,
                progress_visibility,
            });
            return;
        }
        if text_visibility == Visibility::Visible {
            self.write_line(&message_key.yellow().to_string());
        }
        if progress_visibility == Visibility::Visible {
            self.write_line(&"Removing...".dimmed().to_string());
        }
    }

    fn on_event(&self, source: &str, param: &str) {
        if self.json {
            self.write_json(&ListenerEvent::Event {
                source: source.to_string(),
                param: param.to_string(),
            });
        } else {
            self.write_line(&format!("{} {}", format!("{}:", source).green(), param));
        }
    }
}
