//! Sink implementations

pub mod fn_sink;
pub mod memory;
pub mod stdout;

pub use fn_sink::FnSink;
pub use memory::MemorySink;
pub use stdout::StdoutSink;

pub use crate::core::Sink;
