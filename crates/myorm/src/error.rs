//! Error types for myorm

use thiserror::Error;

/// Result type alias for myorm operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Error types for statement generation and driver operations
#[derive(Debug, Error)]
pub enum DriverError {
    /// Where clause references an operator missing from the registry
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Insert/Update was asked to write zero columns
    #[error("{0} statement has no columns to write")]
    EmptyData(&'static str),

    /// A value reached a position it cannot be rendered in
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// Identifier is empty or contains characters that cannot be quoted
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),

    /// Error surfaced by the connection collaborator at execution time
    #[error("connection error: {0}")]
    Connection(String),
}

impl DriverError {
    /// Create an unsupported-value error
    pub fn unsupported_value(message: impl Into<String>) -> Self {
        Self::UnsupportedValueType(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Check if this is an unknown-operator error
    pub fn is_unknown_operator(&self) -> bool {
        matches!(self, Self::UnknownOperator(_))
    }

    /// Check if this is an empty-data error
    pub fn is_empty_data(&self) -> bool {
        matches!(self, Self::EmptyData(_))
    }

    /// Check if this is an unsupported-value error
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValueType(_))
    }
}
