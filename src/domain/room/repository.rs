//! Room repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Room, RoomStatus, RoomType};
use crate::domain::error::DomainResult;
use crate::domain::value_objects::DateRange;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Save a new room
    async fn save(&self, room: Room) -> DomainResult<()>;

    /// Find room by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Room>>;

    /// Find room by its door number
    async fn find_by_number(&self, number: &str) -> DomainResult<Option<Room>>;

    /// Update an existing room
    async fn update(&self, room: Room) -> DomainResult<()>;

    /// Delete a room by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Find all rooms
    async fn find_all(&self) -> DomainResult<Vec<Room>>;

    /// Find rooms of a given category
    async fn find_by_type(&self, room_type: RoomType) -> DomainResult<Vec<Room>>;

    /// Find rooms in a given administrative status
    async fn find_by_status(&self, status: RoomStatus) -> DomainResult<Vec<Room>>;

    /// Find rooms that could host a stay in the given window.
    ///
    /// Filters on administrative status and capacity only. Callers still
    /// have to cross-check the reservation book for date conflicts.
    async fn find_available_rooms(
        &self,
        date_range: &DateRange,
        capacity: Option<u32>,
    ) -> DomainResult<Vec<Room>>;
}
