//! Output metrics
//!
//! Counters describing what the facility did with the messages it was given:
//! written to the sink, suppressed by the level filter, or lost to a failing sink.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use serverless_log::OutputMetrics;
///
/// let metrics = OutputMetrics::new();
/// metrics.record_written();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.written(), 1);
/// assert_eq!(metrics.suppressed(), 1);
/// ```
#[derive(Debug)]
pub struct OutputMetrics {
    /// Writes accepted by the sink
    written: AtomicU64,

    /// Messages dropped by the level filter
    suppressed: AtomicU64,

    /// Writes the sink rejected or panicked on
    write_failures: AtomicU64,
}

impl OutputMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Returns the previous count
    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.written.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for OutputMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for OutputMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            written: AtomicU64::new(self.written()),
            suppressed: AtomicU64::new(self.suppressed()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}
