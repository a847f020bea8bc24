//! Unified error types for the domain layer
//!
//! Every rule the domain enforces reports through [`DomainError`], so adapters
//! can tell a malformed query apart from a rejected record without string matching.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A player record violates a field constraint
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Identifier is not a positive integer
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// A query parameter could not be parsed
    #[error("Invalid parameter {key}: {reason}")]
    InvalidParameter { key: String, reason: String },
}

impl DomainError {
    /// Creates a validation error for a rejected player record.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Creates a parameter error naming the offending key.
    ///
    /// Use this when a string-typed query value does not parse into
    /// its directive type:
    /// - Unknown enum variant names
    /// - Non-numeric bounds
    /// - Out-of-range page numbers or sizes
    pub fn invalid_parameter(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a query parameter error.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
