//! Sink trait for physical text output

use super::error::Result;

/// Destination for raw terminal text.
///
/// Sinks receive fully formatted text; they never add separators of their own.
pub trait Sink: Send + Sync {
    fn write_str(&mut self, text: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
