//! Process-wide output
//!
//! Configured once with [`init`], or lazily from the environment on first use.
//! The free functions at the crate root delegate here.

use super::{
    config::LogConfig,
    error::{LogError, Result},
    legacy::{Legacy, LegacyOptions},
    logger::NamespacedLogger,
    output::Output,
    plugin::PluginWriters,
    progress::ProgressTracker,
};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Output> = OnceLock::new();

/// Set the process-wide configuration. Fails once the output exists.
pub fn init(config: LogConfig) -> Result<&'static Output> {
    let mut pending = Some(config);
    let output = GLOBAL.get_or_init(|| {
        let config = pending.take().unwrap_or_default();
        Output::builder().config(config).build()
    });

    if pending.is_some() {
        Err(LogError::AlreadyInitialized)
    } else {
        Ok(output)
    }
}

pub fn global() -> &'static Output {
    GLOBAL.get_or_init(|| Output::builder().config(LogConfig::from_env()).build())
}

pub fn legacy_log(message: &str, options: &LegacyOptions) {
    global().legacy_log(message, options);
}

pub fn legacy() -> &'static Legacy {
    global().legacy()
}

pub fn log() -> &'static Arc<NamespacedLogger> {
    global().log()
}

pub fn write_text(text: &str) {
    global().write_text(text);
}

pub fn progress() -> &'static ProgressTracker {
    global().progress()
}

pub fn get_plugin_writers(plugin_id: &str) -> Arc<PluginWriters> {
    global().get_plugin_writers(plugin_id)
}

pub fn log_level_index() -> usize {
    global().log_level_index()
}

pub fn is_verbose_mode() -> bool {
    global().is_verbose_mode()
}
