//! CheckInReservation use case

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Permission, Reservation, ReservationRepository, RoomRepository,
    UserRepository,
};

/// Input for checking in a reservation
#[derive(Debug, Clone)]
pub struct CheckInReservationDto {
    pub reservation_id: Uuid,
    /// The staff member performing the check-in
    pub user_id: Uuid,
}

/// Checks a confirmed reservation in and marks its room occupied.
///
/// Requires the `CheckIn` permission; ownership is irrelevant because
/// guests cannot check themselves in. If the room record has gone
/// missing the check-in still goes through and the room side effect is
/// skipped with a warning.
pub struct CheckInReservation {
    reservation_repository: Arc<dyn ReservationRepository>,
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CheckInReservation {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepository>,
        room_repository: Arc<dyn RoomRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reservation_repository,
            room_repository,
            user_repository,
        }
    }

    pub async fn execute(&self, dto: CheckInReservationDto) -> DomainResult<Reservation> {
        let reservation = self
            .reservation_repository
            .find_by_id(dto.reservation_id)
            .await?;
        let Some(mut reservation) = reservation else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: dto.reservation_id.to_string(),
            });
        };

        let user = self.user_repository.find_by_id(dto.user_id).await?;
        let Some(user) = user else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: dto.user_id.to_string(),
            });
        };

        if !user.can(Permission::CheckIn) {
            return Err(DomainError::Forbidden(
                "User does not have permission to check in reservations".to_string(),
            ));
        }

        reservation.check_in()?;

        match self.room_repository.find_by_id(reservation.room_id()).await? {
            Some(mut room) => {
                room.mark_as_occupied();
                self.room_repository.update(room).await?;
            }
            None => {
                warn!(
                    reservation_id = %reservation.id(),
                    room_id = %reservation.room_id(),
                    "Room not found during check-in, skipping room status update"
                );
            }
        }

        self.reservation_repository
            .update(reservation.clone())
            .await?;

        info!(
            reservation_id = %reservation.id(),
            checked_in_by = %user.id(),
            "Reservation checked in"
        );

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────
