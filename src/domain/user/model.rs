//! User domain entity with role-based permissions

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value_objects::Email;

/// Action a user may or may not be allowed to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    CreateRoom,
    UpdateRoom,
    DeleteRoom,
    ViewAllRooms,
    CreateReservation,
    CancelOwnReservation,
    CancelAnyReservation,
    ViewOwnReservations,
    ViewAllReservations,
    CheckIn,
    CheckOut,
    ManageUsers,
}

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Guest,
    Receptionist,
    Admin,
}

const ADMIN_PERMISSIONS: &[Permission] = &[
    Permission::CreateRoom,
    Permission::UpdateRoom,
    Permission::DeleteRoom,
    Permission::ViewAllRooms,
    Permission::CreateReservation,
    Permission::CancelOwnReservation,
    Permission::CancelAnyReservation,
    Permission::ViewOwnReservations,
    Permission::ViewAllReservations,
    Permission::CheckIn,
    Permission::CheckOut,
    Permission::ManageUsers,
];

const RECEPTIONIST_PERMISSIONS: &[Permission] = &[
    Permission::CreateRoom,
    Permission::UpdateRoom,
    Permission::ViewAllRooms,
    Permission::CreateReservation,
    Permission::CancelAnyReservation,
    Permission::ViewAllReservations,
    Permission::CheckIn,
    Permission::CheckOut,
];

const GUEST_PERMISSIONS: &[Permission] = &[
    Permission::CreateReservation,
    Permission::CancelOwnReservation,
    Permission::ViewOwnReservations,
];

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Receptionist => "RECEPTIONIST",
            Self::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GUEST" => Some(Self::Guest),
            "RECEPTIONIST" => Some(Self::Receptionist),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Full permission set granted by this role
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::Admin => ADMIN_PERMISSIONS,
            Self::Receptionist => RECEPTIONIST_PERMISSIONS,
            Self::Guest => GUEST_PERMISSIONS,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User account aggregate
///
/// Holds the stored password hash, never the plaintext. Authorization
/// is answered locally via `can`, a pure function of the role.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    email: Email,
    password_hash: String,
    name: String,
    phone: String,
    document_id: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: Uuid,
        email: Email,
        password_hash: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        document_id: impl Into<String>,
        role: UserRole,
    ) -> DomainResult<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Name cannot be empty".to_string()));
        }
        let password_hash = password_hash.into();
        if password_hash.trim().is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id,
            email,
            password_hash,
            name: name.to_string(),
            phone: phone.into(),
            document_id: document_id.into(),
            role,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }

    /// Whether this user's role grants the given permission
    pub fn can(&self, permission: Permission) -> bool {
        self.role.permissions().contains(&permission)
    }

    pub fn update_profile(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> DomainResult<()> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Name cannot be empty".to_string()));
        }
        self.name = name.to_string();
        self.phone = phone.into();
        Ok(())
    }

    pub fn change_password(&mut self, new_password_hash: impl Into<String>) -> DomainResult<()> {
        let new_password_hash = new_password_hash.into();
        if new_password_hash.trim().is_empty() {
            return Err(DomainError::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }
        self.password_hash = new_password_hash;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
