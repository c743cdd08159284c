use thiserror::Error;

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;

/// Errors that can occur while computing a pagination window
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Page index outside `1..=max_page`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PaginationError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
