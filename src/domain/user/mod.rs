//! User aggregate
//!
//! Contains the User entity, role/permission types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Permission, User, UserRole};
pub use repository::UserRepository;
