//! In-memory sink for capturing output
//!
//! Clones share one buffer, so a test can hand one clone to an output and
//! read what was written through another.

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drain the buffer, returning what it held
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.buffer.lock().push_str(text);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
