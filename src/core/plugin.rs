//! Per-plugin writer bundles

use super::{logger::NamespacedLogger, progress::ProgressTracker, terminal::Terminal};
use std::fmt;
use std::sync::Arc;

/// `{ log, write_text, progress }` for one plugin, shared with the output's
/// level threshold and sink. One bundle per plugin id for the output's lifetime.
pub struct PluginWriters {
    id: String,
    log: Arc<NamespacedLogger>,
    progress: ProgressTracker,
    terminal: Arc<Terminal>,
}

impl PluginWriters {
    pub(crate) fn new(
        id: String,
        log: Arc<NamespacedLogger>,
        progress: ProgressTracker,
        terminal: Arc<Terminal>,
    ) -> Self {
        Self {
            id,
            log,
            progress,
            terminal,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn log(&self) -> &Arc<NamespacedLogger> {
        &self.log
    }

    /// Progress keys here never collide with other plugins or the root tracker.
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Same as the root `write_text`: raw text through the sink.
    pub fn write_text(&self, text: &str) {
        self.terminal.emit(text);
    }
}

impl fmt::Debug for PluginWriters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginWriters")
            .field("id", &self.id)
            .field("namespace", &self.log.namespace())
            .finish()
    }
}
