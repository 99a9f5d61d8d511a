//! User repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::User;
use crate::domain::error::DomainResult;
use crate::domain::value_objects::Email;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user
    async fn save(&self, user: User) -> DomainResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    /// Update an existing user
    async fn update(&self, user: User) -> DomainResult<()>;

    /// Delete a user by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Find all users
    async fn find_all(&self) -> DomainResult<Vec<User>>;
}
