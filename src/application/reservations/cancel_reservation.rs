//! CancelReservation use case

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Permission, Reservation, ReservationRepository, UserRepository,
};

/// Input for cancelling a reservation
#[derive(Debug, Clone)]
pub struct CancelReservationDto {
    pub reservation_id: Uuid,
    /// The acting user, not necessarily the reservation owner
    pub user_id: Uuid,
}

/// Cancels a reservation on behalf of an authorized actor.
///
/// Owners may cancel their own bookings if their role grants
/// `CancelOwnReservation`; staff with `CancelAnyReservation` may cancel
/// anyone's. The entity itself decides whether its current status still
/// permits cancellation. Room status is untouched: a Pending or
/// Confirmed booking never occupied the room.
pub struct CancelReservation {
    reservation_repository: Arc<dyn ReservationRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CancelReservation {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reservation_repository,
            user_repository,
        }
    }

    pub async fn execute(&self, dto: CancelReservationDto) -> DomainResult<Reservation> {
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

        let can_cancel_own =
            user.can(Permission::CancelOwnReservation) && reservation.user_id() == user.id();
        let can_cancel_any = user.can(Permission::CancelAnyReservation);

        if !can_cancel_own && !can_cancel_any {
            return Err(DomainError::Forbidden(
                "User does not have permission to cancel this reservation".to_string(),
            ));
        }

        reservation.cancel()?;

        self.reservation_repository
            .update(reservation.clone())
            .await?;

        info!(
            reservation_id = %reservation.id(),
            cancelled_by = %user.id(),
            "Reservation cancelled"
        );

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────
