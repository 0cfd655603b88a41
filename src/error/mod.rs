//! Error handling module for fragcut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for fragcut operations outside the domain layer
#[derive(Error, Debug)]
pub enum FragcutError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Configuration file given explicitly but missing
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Logging setup failed
    #[error("Failed to initialize logging: {message}")]
    LoggingError { message: String },

    /// Report serialization failed
    #[error("Failed to serialize output: {message}")]
    SerializationError { message: String },

    /// Domain error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for fragcut operations
pub type FragcutResult<T> = std::result::Result<T, FragcutError>;
