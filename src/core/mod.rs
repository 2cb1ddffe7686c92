//! Core output types and registries

pub mod config;
pub mod error;
pub mod global;
pub mod legacy;
pub mod levels;
pub mod log_level;
pub mod logger;
pub mod meta;
pub mod metrics;
pub mod output;
pub mod plugin;
pub mod progress;
pub mod registry;
pub mod sink;
pub mod style;
pub mod terminal;

pub use config::{LogConfig, DEFAULT_ENTITY, DEFAULT_NAMESPACE};
pub use error::{LogError, Result};
pub use legacy::{format_legacy, Entity, Legacy, LegacyOptions, DEFAULT_COLOR};
pub use levels::LevelRegistry;
pub use log_level::LogLevel;
pub use logger::NamespacedLogger;
pub use meta::{FieldValue, Meta};
pub use metrics::OutputMetrics;
pub use output::{Output, OutputBuilder};
pub use plugin::PluginWriters;
pub use progress::{ProgressHandle, ProgressStatus, ProgressTracker};
pub use sink::Sink;
pub use style::{Decorator, Style};
pub use terminal::ProgressKey;
