//! Closure-backed sink
//!
//! The injection point for callers that want to intercept writes, the way a
//! test swaps out a process's stdout writer.

use crate::core::{Result, Sink};

pub struct FnSink<F>
where
    F: FnMut(&str) -> Result<()> + Send + Sync,
{
    write: F,
    name: String,
}

impl<F> FnSink<F>
where
    F: FnMut(&str) -> Result<()> + Send + Sync,
{
    pub fn new(write: F) -> Self {
        Self {
            write,
            name: "fn".to_string(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&str) -> Result<()> + Send + Sync,
{
    fn write_str(&mut self, text: &str) -> Result<()> {
        (self.write)(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
