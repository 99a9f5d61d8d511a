//! Authentication capability used by the identity use cases
//!
//! The domain only states what it needs (hashing, token issue and
//! verification); the concrete implementation lives in the
//! infrastructure layer and is injected where required.

use uuid::Uuid;

use crate::domain::error::DomainResult;
use crate::domain::user::{User, UserRole};

/// Claims carried by an issued token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPayload {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Password hashing and token issuance capability
pub trait AuthService: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash_password(&self, password: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool>;

    /// Issue a signed token for the user
    fn generate_token(&self, user: &User) -> DomainResult<String>;

    /// Verify a token and recover its claims
    fn verify_token(&self, token: &str) -> DomainResult<TokenPayload>;
}
