//! Domain errors for record value objects.

use std::fmt;

/// Domain-level errors raised while constructing or parsing value objects.
///
/// These errors are independent of the storage layout; the codec wraps them
/// with the column name that produced the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field or type name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A value required by the record's discriminant is missing.
    MissingField {
        /// Field name.
        field: String,
        /// Discriminant that requires the field (e.g. "LIMIT").
        required_by: String,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for [`DomainError::MissingField`].
    pub fn missing(field: impl Into<String>, required_by: impl fmt::Display) -> Self {
        Self::MissingField {
            field: field.into(),
            required_by: required_by.to_string(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::MissingField { field, required_by } => {
                write!(f, "Missing '{field}' required by {required_by}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::invalid("quantity", "must not be negative");
        let msg = format!("{err}");
        assert!(msg.contains("quantity"));
        assert!(msg.contains("negative"));
    }

    #[test]
    fn domain_error_missing_field_display() {
        let err = DomainError::missing("trigger_price", "STOP_MARKET");
        let msg = format!("{err}");
        assert!(msg.contains("trigger_price"));
        assert!(msg.contains("STOP_MARKET"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::invalid("test", "test"));
        assert!(!err.to_string().is_empty());
    }
}
