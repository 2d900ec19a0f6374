//! # Core Error Types
//!
//! Validation errors for the foundational types. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations, and every variant
//! carries the input that was rejected.

use thiserror::Error;

/// Errors raised by `parley-core` constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Party name failed validation (empty, whitespace-only, or too long).
    #[error("invalid party name: {0}")]
    InvalidPartyName(String),

    /// Timestamp string was not valid UTC ISO8601 with Z suffix.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_party_name_display() {
        let err = CoreError::InvalidPartyName("name must not be empty".to_string());
        assert!(format!("{err}").contains("must not be empty"));
    }

    #[test]
    fn invalid_timestamp_display() {
        let err = CoreError::InvalidTimestamp("missing Z suffix".to_string());
        assert!(format!("{err}").contains("Z suffix"));
    }
}
