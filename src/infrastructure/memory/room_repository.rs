//! In-memory room repository

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    DateRange, DomainError, DomainResult, Room, RoomRepository, RoomStatus, RoomType,
};

/// DashMap-backed room store for development and testing
pub struct InMemoryRoomRepository {
    rooms: DashMap<Uuid, Room>,
}

impl InMemoryRoomRepository {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
        }
    }
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save(&self, room: Room) -> DomainResult<()> {
        self.rooms.insert(room.id(), room);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Room>> {
        Ok(self.rooms.get(&id).map(|room| room.clone()))
    }

    async fn find_by_number(&self, number: &str) -> DomainResult<Option<Room>> {
        Ok(self
            .rooms
            .iter()
            .find(|entry| entry.number() == number)
            .map(|entry| entry.clone()))
    }

    async fn update(&self, room: Room) -> DomainResult<()> {
        if !self.rooms.contains_key(&room.id()) {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room.id().to_string(),
            });
        }
        self.rooms.insert(room.id(), room);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.rooms.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> DomainResult<Vec<Room>> {
        Ok(self.rooms.iter().map(|entry| entry.clone()).collect())
    }

    async fn find_by_type(&self, room_type: RoomType) -> DomainResult<Vec<Room>> {
        Ok(self
            .rooms
            .iter()
            .filter(|entry| entry.room_type() == room_type)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_by_status(&self, status: RoomStatus) -> DomainResult<Vec<Room>> {
        Ok(self
            .rooms
            .iter()
            .filter(|entry| entry.status() == status)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_available_rooms(
        &self,
        _date_range: &DateRange,
        capacity: Option<u32>,
    ) -> DomainResult<Vec<Room>> {
        // Date conflicts are resolved by the caller against the
        // reservation book; this store only filters status and size.
        Ok(self
            .rooms
            .iter()
            .filter(|entry| entry.is_available())
            .filter(|entry| capacity.map_or(true, |wanted| entry.can_accommodate(wanted)))
            .map(|entry| entry.clone())
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
