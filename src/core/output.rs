//! The output registry
//!
//! An [`Output`] is the unit everything else hangs off: the level threshold,
//! the swappable sink, the legacy interface, the root logger, the progress
//! tracker and the plugin bundles. Caches start empty and fill on first use.

use super::{
    config::LogConfig,
    error::Result,
    legacy::{Legacy, LegacyOptions},
    levels::LevelRegistry,
    log_level::LogLevel,
    logger::NamespacedLogger,
    metrics::OutputMetrics,
    plugin::PluginWriters,
    progress::ProgressTracker,
    registry::Registry,
    sink::Sink,
    terminal::Terminal,
};
use crate::sinks::StdoutSink;
use std::fmt;
use std::sync::Arc;

pub struct Output {
    terminal: Arc<Terminal>,
    registry: Arc<Registry>,
    namespace: String,
    root: Arc<NamespacedLogger>,
    progress: ProgressTracker,
    legacy: Legacy,
}

impl Output {
    /// Output with the default configuration, writing to stdout
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for Output
    ///
    /// # Example
    /// ```
    /// use serverless_log::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let output = Output::builder()
    ///     .level(LogLevel::Debug)
    ///     .colors(false)
    ///     .sink(sink.clone())
    ///     .build();
    ///
    /// output.log().get("deploy").debug("Resolving variables");
    /// assert_eq!(sink.contents(), "serverless:deploy debug Resolving variables\n");
    /// ```
    #[must_use]
    pub fn builder() -> OutputBuilder {
        OutputBuilder::new()
    }

    fn from_parts(config: LogConfig, sink: Box<dyn Sink>) -> Self {
        let terminal = Arc::new(Terminal::new(&config, sink));
        let registry = Registry::new();
        let root = registry.logger(&terminal, config.namespace.clone());
        let progress = ProgressTracker::new(None, Arc::clone(&terminal), Arc::downgrade(&registry));
        let legacy = Legacy::new(Arc::clone(&terminal));

        Self {
            terminal,
            registry,
            namespace: config.namespace,
            root,
            progress,
            legacy,
        }
    }

    /// Legacy-format message: `"<entity>: "` plus the decorated message and a newline.
    pub fn legacy_log(&self, message: &str, options: &LegacyOptions) {
        self.legacy.log_with(message, options);
    }

    pub fn legacy(&self) -> &Legacy {
        &self.legacy
    }

    /// Root namespaced logger
    pub fn log(&self) -> &Arc<NamespacedLogger> {
        &self.root
    }

    /// Raw text through the sink; no prefix, no newline added.
    pub fn write_text(&self, text: &str) {
        self.terminal.emit(text);
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn get_plugin_writers(&self, plugin_id: &str) -> Arc<PluginWriters> {
        self.registry
            .plugin_writers(&self.terminal, &self.namespace, plugin_id)
    }

    pub fn levels(&self) -> LevelRegistry {
        self.terminal.levels
    }

    #[inline]
    pub fn log_level_index(&self) -> usize {
        self.terminal.levels.log_level_index()
    }

    #[inline]
    pub fn is_verbose_mode(&self) -> bool {
        self.terminal.levels.is_verbose_mode()
    }

    pub fn is_interactive(&self) -> bool {
        self.terminal.is_interactive()
    }

    /// Swap the process sink, returning the previous one. Takes effect on the next write.
    pub fn replace_sink(&self, sink: Box<dyn Sink>) -> Box<dyn Sink> {
        self.terminal.replace_sink(sink)
    }

    pub fn metrics(&self) -> &OutputMetrics {
        &self.terminal.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.terminal.flush()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("namespace", &self.namespace)
            .field("levels", &self.terminal.levels)
            .field("interactive", &self.terminal.is_interactive())
            .finish()
    }
}

/// Builder for constructing Output with a fluent API
pub struct OutputBuilder {
    config: LogConfig,
    sink: Option<Box<dyn Sink>>,
}

impl OutputBuilder {
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
            sink: None,
        }
    }

    /// Replace the whole configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = Some(level);
        self
    }

    /// Suppress every level
    #[must_use = "builder methods return a new value"]
    pub fn silent(mut self) -> Self {
        self.config.level = None;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.config.entity = entity.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.config.interactive = interactive;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.config.colors = colors;
        self
    }

    /// Destination for all output; stdout when not set
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Output {
        let sink = self.sink.unwrap_or_else(|| Box::new(StdoutSink::new()));
        Output::from_parts(self.config, sink)
    }
}

impl Default for OutputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogError;
    use crate::sinks::{FnSink, MemorySink};

    #[test]
    fn test_builder_default() {
        let output = OutputBuilder::default().build();
        assert_eq!(output.log_level_index(), LogLevel::Notice.index());
        assert!(!output.is_verbose_mode());
        assert!(!output.is_interactive());
        assert_eq!(output.log().namespace(), "serverless");
    }

    #[test]
    fn test_builder_full_configuration() {
        let output = Output::builder()
            .level(LogLevel::Debug)
            .entity("Tool")
            .namespace("tool")
            .interactive(true)
            .colors(false)
            .sink(MemorySink::new())
            .build();

        assert!(output.is_verbose_mode());
        assert_eq!(output.log_level_index(), 0);
        assert!(output.is_interactive());
        assert_eq!(output.log().namespace(), "tool");
        assert_eq!(output.get_plugin_writers("x").log().namespace(), "tool:plugin:x");
    }

    #[test]
    fn test_silent_output() {
        let sink = MemorySink::new();
        let output = Output::builder().silent().sink(sink.clone()).build();
        output.log().error("nothing");
        output.progress().get("p").error("nothing");

        assert!(sink.is_empty());
        assert_eq!(output.log_level_index(), LogLevel::ALL.len());
        assert!(!output.is_verbose_mode());
    }

    #[test]
    fn test_write_text_is_raw() {
        let sink = MemorySink::new();
        let output = Output::builder().sink(sink.clone()).build();
        output.write_text("a");
        output.write_text("b\n");
        assert_eq!(sink.contents(), "ab\n");
    }

    #[test]
    fn test_replace_sink_is_late_bound() {
        let first = MemorySink::new();
        let second = MemorySink::new();
        let output = Output::builder().colors(false).sink(first.clone()).build();
        let log = output.log().get("ns");

        log.notice("one");
        let previous = output.replace_sink(Box::new(second.clone()));
        assert_eq!(previous.name(), "memory");
        log.notice("two");

        assert_eq!(first.contents(), "serverless:ns notice one\n");
        assert_eq!(second.contents(), "serverless:ns notice two\n");
    }

    #[test]
    fn test_failing_sink_is_isolated() {
        let output = Output::builder()
            .sink(FnSink::new(|_: &str| Err(LogError::sink_write("broken", "closed"))))
            .build();

        output.log().error("lost");
        output.log().error("lost again");
        assert_eq!(output.metrics().write_failures(), 2);

        let sink = MemorySink::new();
        output.replace_sink(Box::new(sink.clone()));
        let log = output.log().get("after");
        assert!(Arc::ptr_eq(&log, &output.log().get("after")));
        output.write_text("recovered");
        assert_eq!(sink.contents(), "recovered");
    }

    #[test]
    fn test_panicking_sink_is_isolated() {
        let output = Output::builder()
            .sink(FnSink::new(|_: &str| -> Result<()> { panic!("sink exploded") }))
            .build();

        output.write_text("boom");
        assert_eq!(output.metrics().write_failures(), 1);
        assert_eq!(output.metrics().written(), 0);
    }

    #[test]
    fn test_legacy_log_through_output() {
        let sink = MemorySink::new();
        let output = Output::builder().colors(false).sink(sink.clone()).build();
        output.legacy_log("basic message", &LegacyOptions::new());
        assert_eq!(sink.contents(), "Serverless: basic message\n");
    }
}
