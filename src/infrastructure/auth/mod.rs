//! Password hashing and JWT issuance
//!
//! Concrete `AuthService` backed by bcrypt and HS256 tokens. Use cases
//! only ever see the domain trait.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{AuthService, DomainError, DomainResult, TokenPayload, User, UserRole};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token expiration time in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "super-secret-key-change-in-production".to_string()),
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(168),
            issuer: "grandview-hotel".to_string(),
        }
    }
}

impl JwtConfig {
    /// Create JwtConfig from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Claims embedded in issued tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Account email
    pub email: String,
    /// User role
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    fn new(user: &User, config: &JwtConfig) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: user.id().to_string(),
            email: user.email().value().to_string(),
            role: user.role().as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }
}

/// bcrypt + JWT implementation of the auth capability
pub struct JwtAuthService {
    config: JwtConfig,
}

impl JwtAuthService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

fn invalid_token() -> DomainError {
    DomainError::Unauthorized("Invalid or expired token".to_string())
}

impl AuthService for JwtAuthService {
    fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| DomainError::Validation(format!("Failed to verify password: {}", e)))
    }

    fn generate_token(&self, user: &User) -> DomainResult<String> {
        let claims = TokenClaims::new(user, &self.config);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
        .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))
    }

    fn verify_token(&self, token: &str) -> DomainResult<TokenPayload> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| invalid_token())?;

        let claims = token_data.claims;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| invalid_token())?;
        let role = UserRole::from_str(&claims.role).ok_or_else(invalid_token)?;

        Ok(TokenPayload {
            user_id,
            email: claims.email,
            role,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────
