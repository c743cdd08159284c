use thiserror::Error;

/// Result type for excerpt operations
pub type Result<T> = std::result::Result<T, ExcerptError>;

/// Errors that can occur while configuring an excerpt builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExcerptError {
    /// Budget outside its documented domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ExcerptError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
