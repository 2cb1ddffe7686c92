//! Error types for the output facility

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink rejected a write
    #[error("Sink '{sink}' failed to write: {message}")]
    SinkWrite { sink: String, message: String },

    /// Unknown color keyword in a style request
    #[error("Invalid color: '{0}'")]
    InvalidColor(String),

    /// Unknown level name
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Process-wide configuration was already set
    #[error("Process-wide output is already initialized")]
    AlreadyInitialized,

    /// Configuration document could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create a sink write error
    pub fn sink_write(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LogError::SinkWrite {
            sink: sink.into(),
            message: message.into(),
        }
    }

    pub fn invalid_color(name: impl Into<String>) -> Self {
        LogError::InvalidColor(name.into())
    }

    pub fn invalid_level(name: impl Into<String>) -> Self {
        LogError::InvalidLevel(name.into())
    }
}
