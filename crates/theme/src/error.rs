use thiserror::Error;

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors that can occur while configuring or rendering the theme
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Settings that parse but cannot be rendered
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings text is neither valid JSON nor valid TOML
    #[error("Settings parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Excerpt(#[from] folio_excerpt::ExcerptError),

    #[error(transparent)]
    Pagination(#[from] folio_pagination::PaginationError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThemeError {
    /// Create an invalid settings error
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
