//! LoginUser use case

use std::sync::Arc;

use tracing::info;

use crate::domain::{AuthService, DomainError, DomainResult, Email, UserRepository};

use super::register_user::AuthenticatedUser;

/// Input for signing in
#[derive(Debug, Clone)]
pub struct LoginUserDto {
    pub email: String,
    pub password: String,
}

/// Authenticates a user by email and password.
///
/// Unknown email and wrong password fail with the same message so the
/// endpoint cannot be used to probe which addresses have accounts.
pub struct LoginUser {
    user_repository: Arc<dyn UserRepository>,
    auth_service: Arc<dyn AuthService>,
}

impl LoginUser {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            user_repository,
            auth_service,
        }
    }

    pub async fn execute(&self, dto: LoginUserDto) -> DomainResult<AuthenticatedUser> {
        let email = Email::new(&dto.email)?;

        let user = self.user_repository.find_by_email(&email).await?;
        let Some(user) = user else {
            return Err(DomainError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        };

        let valid = self
            .auth_service
            .verify_password(&dto.password, user.password_hash())?;
        if !valid {
            return Err(DomainError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.auth_service.generate_token(&user)?;

        info!(user_id = %user.id(), "User logged in");

        Ok(AuthenticatedUser { user, token })
    }
}

// ── Tests ──────────────────────────────────────────────────────
