use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Could not load configuration: {0}")]
    ConfigLoad(String),

    #[error("Configuration is invalid: {0}")]
    ConfigInvalid(String),

    #[error("This event has no associated pull request")]
    NoAssociatedChange,

    #[error("Invalid package version: {0}")]
    InvalidVersion(String),

    #[error("Invalid bump type: {0}")]
    InvalidBumpKind(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration load error with context
    pub fn config_load(msg: impl Into<String>) -> Self {
        BumpError::ConfigLoad(msg.into())
    }

    /// Create a configuration validation error with context
    pub fn config_invalid(msg: impl Into<String>) -> Self {
        BumpError::ConfigInvalid(msg.into())
    }

    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        BumpError::InvalidVersion(msg.into())
    }

    /// Create an invalid-bump-kind error naming the rejected kind
    pub fn invalid_bump_kind(kind: impl Into<String>) -> Self {
        BumpError::InvalidBumpKind(kind.into())
    }
}
