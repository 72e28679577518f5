//! Error types for sporeform.
//!
//! Generation itself is total and never fails. Errors only come from the
//! edges: reading agent records and engine configuration from JSON or disk.

use thiserror::Error;

/// Errors from loading, saving and validating inputs.
#[derive(Error, Debug)]
pub enum SporeformError {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or a shape mismatch.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid input with unusable values.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },
}

impl SporeformError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SporeformError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible sporeform operations.
pub type Result<T> = std::result::Result<T, SporeformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let e = SporeformError::invalid("particle_count", "must be at least 1");
        assert_eq!(e.to_string(), "Invalid particle_count: must be at least 1");
    }

    #[test]
    fn test_json_conversion() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let e: SporeformError = err.into();
        assert!(matches!(e, SporeformError::Json(_)));
    }
}
