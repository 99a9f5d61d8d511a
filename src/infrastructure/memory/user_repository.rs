//! In-memory user repository

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Email, User, UserRepository};

/// DashMap-backed user store for development and testing
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> DomainResult<()> {
        self.users.insert(user.id(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        Ok(self.users.get(&id).map(|user| user.clone()))
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email() == email)
            .map(|entry| entry.clone()))
    }

    async fn update(&self, user: User) -> DomainResult<()> {
        if !self.users.contains_key(&user.id()) {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: user.id().to_string(),
            });
        }
        self.users.insert(user.id(), user);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.users.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.clone()).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
