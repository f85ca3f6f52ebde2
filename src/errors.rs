// Copyright 2025 Cowboy AI, LLC.

//! Error types for classification operations

use thiserror::Error;

/// Errors that can occur while configuring or running the classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Caller supplied a value outside the accepted domain
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A lexicon failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A configuration file could not be read
    #[error("I/O error on {path}: {message}")]
    Io {
        /// Path that was being read
        path: String,
        /// Error message from the operating system
        message: String,
    },
}

/// Result type for classification operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<toml::ser::Error> for DomainError {
    fn from(err: toml::ser::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        DomainError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is an input validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, DomainError::InvalidInput { .. })
    }

    /// Check if this error came from loading or validating a lexicon
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidConfiguration(_)
                | DomainError::SerializationError(_)
                | DomainError::Io { .. }
        )
    }
}
