//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing an encoded record
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Handler failed to write a record
    #[error("Handler '{handler}' failed: {message}")]
    HandlerError { handler: String, message: String },

    /// A record could not be rendered, e.g. a bad timestamp pattern
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a handler error
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerError {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
