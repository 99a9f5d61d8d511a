//! SearchAvailableRooms use case, the read path of the availability engine

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::{
    DateRange, DomainResult, ReservationRepository, Room, RoomRepository, RoomType,
};

/// Search filters for an availability query
#[derive(Debug, Clone)]
pub struct SearchAvailableRoomsDto {
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub capacity: Option<u32>,
    pub room_type: Option<RoomType>,
}

/// Finds rooms genuinely free for a window.
///
/// Two-stage filter: the room repository first narrows on status and
/// capacity (and this use case on type), then each surviving candidate
/// is cross-checked against the reservation book. The status flag alone
/// is not enough, a room can sit administratively available while a
/// confirmed future booking overlaps the requested window.
pub struct SearchAvailableRooms {
    room_repository: Arc<dyn RoomRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl SearchAvailableRooms {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            room_repository,
            reservation_repository,
        }
    }

    pub async fn execute(&self, dto: SearchAvailableRoomsDto) -> DomainResult<Vec<Room>> {
        let date_range = DateRange::new(dto.check_in_date, dto.check_out_date)?;

        let mut candidates = self
            .room_repository
            .find_available_rooms(&date_range, dto.capacity)
            .await?;

        if let Some(room_type) = dto.room_type {
            candidates.retain(|room| room.room_type() == room_type);
        }

        let mut free_rooms = Vec::with_capacity(candidates.len());
        for room in candidates {
            let overlapping = self
                .reservation_repository
                .find_reservations_by_room_and_date_range(room.id(), &date_range)
                .await?;
            if overlapping.is_empty() {
                free_rooms.push(room);
            }
        }

        info!(
            range = %date_range,
            matches = free_rooms.len(),
            "Availability search completed"
        );

        Ok(free_rooms)
    }
}

// ── Tests ──────────────────────────────────────────────────────
