//! CreateRoom use case

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Money, Room, RoomRepository, RoomType};

/// Input for registering a new room
#[derive(Debug, Clone)]
pub struct CreateRoomDto {
    pub number: String,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub currency: String,
    pub capacity: u32,
    pub amenities: Vec<String>,
}

/// Adds a room to the inventory, keeping door numbers unique.
pub struct CreateRoom {
    room_repository: Arc<dyn RoomRepository>,
}

impl CreateRoom {
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    pub async fn execute(&self, dto: CreateRoomDto) -> DomainResult<Room> {
        let existing = self.room_repository.find_by_number(&dto.number).await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!(
                "Room with number {} already exists",
                dto.number
            )));
        }

        let price = Money::new(dto.price_per_night, &dto.currency)?;

        let room = Room::new(
            Uuid::new_v4(),
            dto.number,
            dto.room_type,
            price,
            dto.capacity,
            dto.amenities,
        )?;

        self.room_repository.save(room.clone()).await?;

        info!(room_id = %room.id(), number = room.number(), "Room created");

        Ok(room)
    }
}

// ── Tests ──────────────────────────────────────────────────────
