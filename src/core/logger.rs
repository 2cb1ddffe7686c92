//! Namespaced event logger
//!
//! One instance per namespace string; [`NamespacedLogger::get`] derives and
//! caches children. Each level method checks the threshold before doing any
//! formatting work.

use super::{
    log_level::LogLevel,
    meta::Meta,
    registry::{child_namespace, Registry},
    style::Style,
    terminal::Terminal,
};
use std::fmt;
use std::sync::{Arc, Weak};

pub struct NamespacedLogger {
    namespace: String,
    terminal: Arc<Terminal>,
    registry: Weak<Registry>,
}

impl NamespacedLogger {
    pub(crate) fn new(
        namespace: String,
        terminal: Arc<Terminal>,
        registry: Weak<Registry>,
    ) -> Self {
        Self {
            namespace,
            terminal,
            registry,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Logger for `<namespace>:<child>`; repeated calls return the same instance.
    pub fn get(&self, child: &str) -> Arc<NamespacedLogger> {
        let namespace = child_namespace(&self.namespace, child);
        match self.registry.upgrade() {
            Some(registry) => registry.logger(&self.terminal, namespace),
            // Output already dropped: hand out a detached logger
            None => Arc::new(Self::new(namespace, Arc::clone(&self.terminal), Weak::new())),
        }
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.terminal.levels.is_enabled(level)
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        self.dispatch(level, message.as_ref(), None);
    }

    /// Log with plain-text meta fields appended
    pub fn log_with_meta(&self, level: LogLevel, message: impl AsRef<str>, meta: &Meta) {
        self.dispatch(level, message.as_ref(), Some(meta));
    }

    fn dispatch(&self, level: LogLevel, message: &str, meta: Option<&Meta>) {
        if !self.is_enabled(level) {
            self.terminal.metrics.record_suppressed();
            return;
        }

        let line = self.format_line(level, message, meta);
        self.terminal.emit(&line);
    }

    fn format_line(&self, level: LogLevel, message: &str, meta: Option<&Meta>) -> String {
        let decorator = &self.terminal.decorator;
        let mut line = format!(
            "{} {} {}",
            decorator.decorate(&self.namespace, &Style::new().dimmed(true)),
            decorator.decorate(level.to_str(), &Style::color(level.color_code())),
            message
        );

        if let Some(meta) = meta.filter(|meta| !meta.is_empty()) {
            line.push(' ');
            line.push_str(&meta.format_fields());
        }
        line.push('\n');
        line
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn notice(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Notice, message);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }
}

impl fmt::Debug for NamespacedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespacedLogger")
            .field("namespace", &self.namespace)
            .finish()
    }
}
