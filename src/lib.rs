//! # Serverless Log
//!
//! Terminal output facility for a CLI and its plugins.
//!
//! ## Features
//!
//! - **Legacy messages**: `"Serverless: "`-prefixed, colored single lines
//! - **Event logging**: namespaced loggers with `debug` .. `error` levels
//! - **Progress**: ephemeral, keyed status lines with a global clear
//! - **Plugin writers**: per-plugin `{ log, write_text, progress }` bundles
//!   sharing one level threshold and one sink
//!
//! Use an [`Output`] directly, or the process-wide instance through the free
//! functions below.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Entity, FieldValue, LegacyOptions, LevelRegistry, LogConfig, LogError, LogLevel, Meta,
        NamespacedLogger, Output, OutputBuilder, OutputMetrics, PluginWriters, ProgressHandle,
        ProgressTracker, Result, Sink, Style,
    };
    pub use crate::sinks::{FnSink, MemorySink, StdoutSink};
}

pub use crate::core::global::{
    get_plugin_writers, global, init, is_verbose_mode, legacy, legacy_log, log, log_level_index,
    progress, write_text,
};
pub use crate::core::{
    format_legacy, Decorator, Entity, FieldValue, Legacy, LegacyOptions, LevelRegistry,
    LogConfig, LogError, LogLevel, Meta, NamespacedLogger, Output, OutputBuilder, OutputMetrics,
    PluginWriters, ProgressHandle, ProgressKey, ProgressStatus, ProgressTracker, Result, Sink,
    Style, DEFAULT_COLOR, DEFAULT_ENTITY, DEFAULT_NAMESPACE,
};
pub use crate::sinks::{FnSink, MemorySink, StdoutSink};
