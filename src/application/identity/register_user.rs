//! RegisterUser use case

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    AuthService, DomainError, DomainResult, Email, User, UserRepository, UserRole,
};

/// Input for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub document_id: String,
    pub role: UserRole,
}

/// A freshly registered or authenticated account plus its session token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

/// Registers an account and signs the caller in.
pub struct RegisterUser {
    user_repository: Arc<dyn UserRepository>,
    auth_service: Arc<dyn AuthService>,
}

impl RegisterUser {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            user_repository,
            auth_service,
        }
    }

    pub async fn execute(&self, dto: RegisterUserDto) -> DomainResult<AuthenticatedUser> {
        if dto.password.len() < 6 {
            return Err(DomainError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }

        let email = Email::new(&dto.email)?;

        let existing = self.user_repository.find_by_email(&email).await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = self.auth_service.hash_password(&dto.password)?;

        let user = User::new(
            Uuid::new_v4(),
            email,
            password_hash,
            dto.name,
            dto.phone,
            dto.document_id,
            dto.role,
        )?;

        self.user_repository.save(user.clone()).await?;

        let token = self.auth_service.generate_token(&user)?;

        info!(user_id = %user.id(), role = %user.role(), "User registered");

        Ok(AuthenticatedUser { user, token })
    }
}

// ── Tests ──────────────────────────────────────────────────────
