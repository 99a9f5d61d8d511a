//! Domain errors
//!
//! Every business-rule failure in the crate is one of these variants.
//! They are surfaced synchronously to the caller; nothing is retried
//! internally. Retry policy belongs to whoever invokes a use case.

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A referenced entity does not exist in the store
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Malformed input or value-object construction failure
    #[error("Validation: {0}")]
    Validation(String),

    /// The operation collides with existing state (double booking,
    /// duplicate room number, room not available)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A status transition was attempted outside its allowed source state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The actor lacks the required permission
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Authentication failed (unknown credentials, bad token)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity_and_field() {
        let err = DomainError::NotFound {
            entity: "Room",
            field: "id",
            value: "42".into(),
        };
        assert_eq!(err.to_string(), "Not found: Room with id=42");
    }

    #[test]
    fn variants_format_with_prefix() {
        assert_eq!(
            DomainError::Conflict("Room is not available".into()).to_string(),
            "Conflict: Room is not available"
        );
        assert_eq!(
            DomainError::InvalidState("Only pending reservations can be confirmed".into())
                .to_string(),
            "Invalid state: Only pending reservations can be confirmed"
        );
    }
}
