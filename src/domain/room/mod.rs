//! Room aggregate
//!
//! Contains the Room entity, related types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Room, RoomStatus, RoomType};
pub use repository::RoomRepository;
