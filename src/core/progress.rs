//! Ephemeral progress lines
//!
//! A [`ProgressTracker`] hands out one [`ProgressHandle`] per key. Updates
//! replace the handle's status line instead of appending a log line, and
//! [`ProgressTracker::clear`] drops every handle at once.

use super::{
    log_level::LogLevel,
    registry::Registry,
    style::Style,
    terminal::{ProgressKey, Terminal},
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStatus {
    pub level: LogLevel,
    pub message: String,
}

pub struct ProgressHandle {
    key: ProgressKey,
    generation: u64,
    terminal: Arc<Terminal>,
    status: Mutex<Option<ProgressStatus>>,
}

impl ProgressHandle {
    pub(crate) fn new(key: ProgressKey, generation: u64, terminal: Arc<Terminal>) -> Self {
        Self {
            key,
            generation,
            terminal,
            status: Mutex::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key.name
    }

    /// Last accepted update, if any
    pub fn status(&self) -> Option<ProgressStatus> {
        self.status.lock().clone()
    }

    pub fn update(&self, level: LogLevel, message: impl AsRef<str>) {
        if !self.terminal.levels.is_enabled(level) {
            self.terminal.metrics.record_suppressed();
            return;
        }

        let message = message.as_ref();
        let line = self
            .terminal
            .decorator
            .decorate(message, &Style::color(level.color_code()));
        if self.terminal.update_progress(&self.key, self.generation, line) {
            *self.status.lock() = Some(ProgressStatus {
                level,
                message: message.to_string(),
            });
        }
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.update(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.update(LogLevel::Info, message);
    }

    #[inline]
    pub fn notice(&self, message: impl AsRef<str>) {
        self.update(LogLevel::Notice, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.update(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.update(LogLevel::Error, message);
    }
}

impl fmt::Debug for ProgressHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressHandle")
            .field("key", &self.key)
            .field("status", &self.status())
            .finish()
    }
}

/// Progress interface, either root-scoped or scoped to one plugin.
pub struct ProgressTracker {
    scope: Option<String>,
    terminal: Arc<Terminal>,
    registry: Weak<Registry>,
}

impl ProgressTracker {
    pub(crate) fn new(
        scope: Option<String>,
        terminal: Arc<Terminal>,
        registry: Weak<Registry>,
    ) -> Self {
        Self {
            scope,
            terminal,
            registry,
        }
    }

    /// Handle for `key`; the same key returns the same handle until the next clear.
    pub fn get(&self, key: &str) -> Arc<ProgressHandle> {
        let key = ProgressKey::new(self.scope.as_deref(), key);
        match self.registry.upgrade() {
            Some(registry) => registry.progress_handle(&self.terminal, key),
            None => {
                let generation = self.terminal.progress_generation();
                Arc::new(ProgressHandle::new(key, generation, Arc::clone(&self.terminal)))
            }
        }
    }

    /// Remove all progress state, across every scope of the output.
    pub fn clear(&self) {
        match self.registry.upgrade() {
            Some(registry) => registry.clear_progress(&self.terminal),
            None => self.terminal.clear_progress(),
        }
    }

    /// Number of status lines currently held, across every scope
    pub fn active_lines(&self) -> usize {
        self.terminal.progress_lines()
    }
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("scope", &self.scope)
            .finish()
    }
}
