//! Error handling for moji-log

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level string is not a valid `EnvFilter` directive.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Another global subscriber was installed first.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

impl LogError {
    /// Create a filter parsing error
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}
