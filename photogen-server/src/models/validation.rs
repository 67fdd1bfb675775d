//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field was not sent
    Missing { field: &'static str },

    /// Field value could not be parsed
    InvalidFormat { field: &'static str, value: String },

    /// Multipart body could not be read
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::Malformed { reason } => write!(f, "malformed form data: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "tags_count",
            value: "five".into(),
        };
        assert_eq!(err.to_string(), "invalid tags_count value: 'five'");
        assert_eq!(
            ValidationError::Missing { field: "image" }.to_string(),
            "image is required"
        );
    }
}
