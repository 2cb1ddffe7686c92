//! Output configuration
//!
//! Decided once at startup by the host CLI, read-only afterwards.

use super::error::{LogError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Deserializer};
use std::io::IsTerminal;

pub const DEFAULT_ENTITY: &str = "Serverless";
pub const DEFAULT_NAMESPACE: &str = "serverless";

/// Forces debug output when set to a non-empty value
pub const DEBUG_ENV: &str = "SLS_DEBUG";
/// Level name, or `silent`
pub const LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `None` silences every level
    #[serde(deserialize_with = "deserialize_threshold")]
    pub level: Option<LogLevel>,
    /// Prefix for legacy messages
    pub entity: String,
    /// Root namespace for event logging
    pub namespace: String,
    /// Render progress lines in place
    pub interactive: bool,
    pub colors: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Some(LogLevel::Notice),
            entity: DEFAULT_ENTITY.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            interactive: false,
            colors: true,
        }
    }
}

impl LogConfig {
    /// Configuration derived from the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::from_vars(|name| std::env::var(name).ok());
        config.interactive = std::io::stdout().is_terminal();
        config
    }

    /// Resolve the level from variable lookups; unparsable values keep the default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if lookup(DEBUG_ENV).is_some_and(|value| !value.is_empty()) {
            config.level = Some(LogLevel::Debug);
        } else if let Some(raw) = lookup(LEVEL_ENV) {
            match parse_threshold(&raw) {
                Ok(level) => config.level = level,
                Err(e) => eprintln!("[LOG WARNING] Ignoring {}: {}", LEVEL_ENV, e),
            }
        }
        config
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

/// Parse a threshold name; `silent`, `off` and `none` disable all output.
pub fn parse_threshold(raw: &str) -> Result<Option<LogLevel>> {
    match raw.trim().to_lowercase().as_str() {
        "silent" | "off" | "none" => Ok(None),
        other => other
            .parse::<LogLevel>()
            .map(Some)
            .map_err(|_| LogError::invalid_level(raw)),
    }
}

fn deserialize_threshold<'de, D>(deserializer: D) -> std::result::Result<Option<LogLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_threshold(&raw).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
