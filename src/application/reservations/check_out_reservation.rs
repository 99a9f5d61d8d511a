//! CheckOutReservation use case

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    DomainError, DomainResult, Permission, Reservation, ReservationRepository, RoomRepository,
    UserRepository,
};

/// Input for checking out a reservation
#[derive(Debug, Clone)]
pub struct CheckOutReservationDto {
    pub reservation_id: Uuid,
    /// The staff member performing the check-out
    pub user_id: Uuid,
}

/// Checks a reservation out and returns its room to service.
///
/// Mirror image of check-in: requires the `CheckOut` permission, the
/// reservation must currently be checked in, and the room flips back
/// to available. A missing room record is tolerated the same way.
pub struct CheckOutReservation {
    reservation_repository: Arc<dyn ReservationRepository>,
    room_repository: Arc<dyn RoomRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CheckOutReservation {
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

    pub async fn execute(&self, dto: CheckOutReservationDto) -> DomainResult<Reservation> {
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

        if !user.can(Permission::CheckOut) {
            return Err(DomainError::Forbidden(
                "User does not have permission to check out reservations".to_string(),
            ));
        }

        reservation.check_out()?;

        match self.room_repository.find_by_id(reservation.room_id()).await? {
            Some(mut room) => {
                room.mark_as_available();
                self.room_repository.update(room).await?;
            }
            None => {
                warn!(
                    reservation_id = %reservation.id(),
                    room_id = %reservation.room_id(),
                    "Room not found during check-out, skipping room status update"
                );
            }
        }

        self.reservation_repository
            .update(reservation.clone())
            .await?;

        info!(
            reservation_id = %reservation.id(),
            checked_out_by = %user.id(),
            "Reservation checked out"
        );

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use crate::domain::{
        DateRange, Email, Money, Reservation, ReservationStatus, Room, RoomStatus, RoomType, User,
        UserRole,
    };
    use crate::infrastructure::memory::{
        InMemoryReservationRepository, InMemoryRoomRepository, InMemoryUserRepository,
    };

    struct Fixture {
        use_case: CheckOutReservation,
        reservations: Arc<InMemoryReservationRepository>,
        rooms: Arc<InMemoryRoomRepository>,
        users: Arc<InMemoryUserRepository>,
    }

    fn fixture() -> Fixture {
        let reservations = Arc::new(InMemoryReservationRepository::new());
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let use_case = CheckOutReservation::new(
            reservations.clone() as Arc<dyn ReservationRepository>,
            rooms.clone() as Arc<dyn RoomRepository>,
            users.clone() as Arc<dyn UserRepository>,
        );
        Fixture {
            use_case,
            reservations,
            rooms,
            users,
        }
    }

    fn staff() -> User {
        User::new(
            Uuid::new_v4(),
            Email::new("desk@example.com").unwrap(),
            "$2b$12$hash",
            "Front Desk",
            "+1-555-0100",
            "DOC-1",
            UserRole::Receptionist,
        )
        .unwrap()
    }

    fn occupied_room() -> Room {
        let mut room = Room::new(
            Uuid::new_v4(),
            "101",
            RoomType::Single,
            Money::new(Decimal::from(100), "USD").unwrap(),
            1,
            vec![],
        )
        .unwrap();
        room.mark_as_occupied();
        room
    }

    fn checked_in_reservation(room_id: Uuid) -> Reservation {
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let mut reservation = Reservation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            room_id,
            range,
            1,
            Money::new(Decimal::from(400), "USD").unwrap(),
        )
        .unwrap();
        reservation.confirm().unwrap();
        reservation.check_in().unwrap();
        reservation
    }

    #[tokio::test]
    async fn check_out_transitions_reservation_and_frees_the_room() {
        let f = fixture();
        let actor = staff();
        let room = occupied_room();
        let reservation = checked_in_reservation(room.id());
        f.users.save(actor.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();
        f.reservations.save(reservation.clone()).await.unwrap();

        let checked_out = f
            .use_case
            .execute(CheckOutReservationDto {
                reservation_id: reservation.id(),
                user_id: actor.id(),
            })
            .await
            .unwrap();

        assert_eq!(checked_out.status(), ReservationStatus::CheckedOut);
        assert!(!checked_out.is_active());
        let stored_room = f.rooms.find_by_id(room.id()).await.unwrap().unwrap();
        assert_eq!(stored_room.status(), RoomStatus::Available);
    }

    #[tokio::test]
    async fn check_out_requires_a_checked_in_reservation() {
        let f = fixture();
        let actor = staff();
        let room = occupied_room();
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 5, 0, 0, 0).unwrap(),
        )
        .unwrap();
        let pending = Reservation::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            room.id(),
            range,
            1,
            Money::new(Decimal::from(400), "USD").unwrap(),
        )
        .unwrap();
        f.users.save(actor.clone()).await.unwrap();
        f.rooms.save(room).await.unwrap();
        f.reservations.save(pending.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(CheckOutReservationDto {
                reservation_id: pending.id(),
                user_id: actor.id(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid state: Only checked-in reservations can be checked out"
        );
    }

    #[tokio::test]
    async fn guest_is_forbidden_from_checking_out() {
        let f = fixture();
        let actor = User::new(
            Uuid::new_v4(),
            Email::new("guest@example.com").unwrap(),
            "$2b$12$hash",
            "Jordan Lee",
            "+1-555-0101",
            "DOC-2",
            UserRole::Guest,
        )
        .unwrap();
        let room = occupied_room();
        let reservation = checked_in_reservation(room.id());
        f.users.save(actor.clone()).await.unwrap();
        f.rooms.save(room).await.unwrap();
        f.reservations.save(reservation.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(CheckOutReservationDto {
                reservation_id: reservation.id(),
                user_id: actor.id(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn missing_room_is_tolerated() {
        let f = fixture();
        let actor = staff();
        let reservation = checked_in_reservation(Uuid::new_v4());
        f.users.save(actor.clone()).await.unwrap();
        f.reservations.save(reservation.clone()).await.unwrap();

        let checked_out = f
            .use_case
            .execute(CheckOutReservationDto {
                reservation_id: reservation.id(),
                user_id: actor.id(),
            })
            .await
            .unwrap();
        assert_eq!(checked_out.status(), ReservationStatus::CheckedOut);
    }
}
