//! Email value object

use std::fmt;

use validator::ValidateEmail;

use crate::domain::error::{DomainError, DomainResult};

/// Validated, lower-cased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse and normalize an address. Rejects empty and malformed
    /// input with distinct messages.
    pub fn new(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("Email cannot be empty".to_string()));
        }
        if !trimmed.validate_email() {
            return Err(DomainError::Validation("Invalid email format".to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Tests ──────────────────────────────────────────────────────
