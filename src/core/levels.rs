//! Process-wide level threshold
//!
//! The threshold is fixed when an output is built. A message at level `L` is
//! emitted iff `L >= threshold`, so severe levels are never suppressed by a
//! more verbose threshold. `None` is the silent sentinel.

use super::log_level::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRegistry {
    threshold: Option<LogLevel>,
}

impl LevelRegistry {
    pub fn new(threshold: LogLevel) -> Self {
        Self {
            threshold: Some(threshold),
        }
    }

    /// A registry that suppresses every level.
    pub fn silent() -> Self {
        Self { threshold: None }
    }

    pub fn threshold(&self) -> Option<LogLevel> {
        self.threshold
    }

    /// Position of the threshold in [`LogLevel::ALL`]; one past the last level when silent.
    #[inline]
    pub fn log_level_index(&self) -> usize {
        self.threshold.map_or(LogLevel::ALL.len(), |level| level.index())
    }

    /// True iff debug output is enabled.
    #[inline]
    pub fn is_verbose_mode(&self) -> bool {
        self.threshold == Some(LogLevel::Debug)
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        match self.threshold {
            Some(threshold) => level >= threshold,
            None => false,
        }
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl From<Option<LogLevel>> for LevelRegistry {
    fn from(threshold: Option<LogLevel>) -> Self {
        Self { threshold }
    }
}
