//! CreateReservation use case, the write path of the availability engine

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    DateRange, DomainError, DomainResult, PricingService, Reservation, ReservationRepository,
    RoomRepository, UserRepository,
};

/// Input for creating a reservation
#[derive(Debug, Clone)]
pub struct CreateReservationDto {
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub number_of_guests: u32,
}

/// Creates a reservation after proving the room can take it.
///
/// Preconditions run in order, each failing with its own error: user
/// exists, room exists, room is administratively available, capacity
/// suffices, the requested range is well formed, and no active
/// reservation overlaps it. Only then is the stay priced and persisted.
///
/// The overlap check and the save are not atomic. Two interleaved
/// calls for the same room and window can both pass the check and
/// double-book; serializing per room or enforcing uniqueness in the
/// store closes the window.
pub struct CreateReservation {
    room_repository: Arc<dyn RoomRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl CreateReservation {
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            room_repository,
            reservation_repository,
            user_repository,
        }
    }

    pub async fn execute(&self, dto: CreateReservationDto) -> DomainResult<Reservation> {
        let user = self.user_repository.find_by_id(dto.user_id).await?;
        let Some(user) = user else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: dto.user_id.to_string(),
            });
        };

        let room = self.room_repository.find_by_id(dto.room_id).await?;
        let Some(room) = room else {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: dto.room_id.to_string(),
            });
        };

        if !room.is_available() {
            return Err(DomainError::Conflict("Room is not available".to_string()));
        }

        if !room.can_accommodate(dto.number_of_guests) {
            return Err(DomainError::Conflict(
                "Number of guests exceeds room capacity".to_string(),
            ));
        }

        let date_range = DateRange::new(dto.check_in_date, dto.check_out_date)?;

        // The repository filters to active reservations and applies the
        // half-open overlap rule, so any hit here is a real conflict.
        let overlapping = self
            .reservation_repository
            .find_reservations_by_room_and_date_range(dto.room_id, &date_range)
            .await?;
        if !overlapping.is_empty() {
            return Err(DomainError::Conflict(
                "Room is already reserved for these dates".to_string(),
            ));
        }

        let total_price =
            PricingService::calculate_total_price(room.price_per_night(), &date_range)?;

        let reservation = Reservation::new(
            Uuid::new_v4(),
            user.id(),
            room.id(),
            date_range,
            dto.number_of_guests,
            total_price,
        )?;

        self.reservation_repository.save(reservation.clone()).await?;

        info!(
            reservation_id = %reservation.id(),
            room_id = %room.id(),
            user_id = %user.id(),
            nights = date_range.number_of_nights(),
            "Reservation created"
        );

        Ok(reservation)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use crate::domain::{Email, Money, ReservationStatus, Room, RoomType, User, UserRole};
    use crate::infrastructure::memory::{
        InMemoryReservationRepository, InMemoryRoomRepository, InMemoryUserRepository,
    };

    struct Fixture {
        use_case: CreateReservation,
        rooms: Arc<InMemoryRoomRepository>,
        reservations: Arc<InMemoryReservationRepository>,
        users: Arc<InMemoryUserRepository>,
    }

    fn fixture() -> Fixture {
        let rooms = Arc::new(InMemoryRoomRepository::new());
        let reservations = Arc::new(InMemoryReservationRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let use_case = CreateReservation::new(
            rooms.clone() as Arc<dyn RoomRepository>,
            reservations.clone() as Arc<dyn ReservationRepository>,
            users.clone() as Arc<dyn UserRepository>,
        );
        Fixture {
            use_case,
            rooms,
            reservations,
            users,
        }
    }

    fn sample_guest() -> User {
        User::new(
            Uuid::new_v4(),
            Email::new("guest@example.com").unwrap(),
            "$2b$12$hash",
            "Jordan Lee",
            "+1-555-0100",
            "DOC-42",
            UserRole::Guest,
        )
        .unwrap()
    }

    fn sample_room(price: i64, capacity: u32) -> Room {
        Room::new(
            Uuid::new_v4(),
            "101",
            RoomType::Double,
            Money::new(Decimal::from(price), "USD").unwrap(),
            capacity,
            vec![],
        )
        .unwrap()
    }

    fn dto(user_id: Uuid, room_id: Uuid, from_day: u32, to_day: u32) -> CreateReservationDto {
        CreateReservationDto {
            user_id,
            room_id,
            check_in_date: Utc.with_ymd_and_hms(2024, 6, from_day, 0, 0, 0).unwrap(),
            check_out_date: Utc.with_ymd_and_hms(2024, 6, to_day, 0, 0, 0).unwrap(),
            number_of_guests: 1,
        }
    }

    #[tokio::test]
    async fn creates_a_pending_reservation_with_the_priced_total() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        let reservation = f
            .use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();

        assert_eq!(reservation.status(), ReservationStatus::Pending);
        assert_eq!(
            reservation.total_price(),
            &Money::new(Decimal::from(400), "USD").unwrap()
        );
        assert_eq!(reservation.user_id(), user.id());
        assert_eq!(reservation.room_id(), room.id());

        let stored = f.reservations.find_by_id(reservation.id()).await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn unknown_user_fails_not_found() {
        let f = fixture();
        let room = sample_room(100, 2);
        f.rooms.save(room.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(dto(Uuid::new_v4(), room.id(), 1, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
    }

    #[tokio::test]
    async fn unknown_room_fails_not_found() {
        let f = fixture();
        let user = sample_guest();
        f.users.save(user.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(dto(user.id(), Uuid::new_v4(), 1, 5))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Room", .. }));
    }

    #[tokio::test]
    async fn room_under_maintenance_is_rejected() {
        let f = fixture();
        let user = sample_guest();
        let mut room = sample_room(100, 2);
        room.mark_as_in_maintenance();
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Conflict: Room is not available");
    }

    #[tokio::test]
    async fn guest_count_above_capacity_is_rejected() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        let mut request = dto(user.id(), room.id(), 1, 5);
        request.number_of_guests = 3;
        let err = f.use_case.execute(request).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflict: Number of guests exceeds room capacity"
        );
    }

    #[tokio::test]
    async fn inverted_dates_fail_validation() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        let err = f
            .use_case
            .execute(dto(user.id(), room.id(), 5, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn overlapping_active_reservation_blocks_the_booking() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        f.use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();

        let err = f
            .use_case
            .execute(dto(user.id(), room.id(), 3, 7))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Conflict: Room is already reserved for these dates"
        );
    }

    #[tokio::test]
    async fn adjacent_stays_are_both_accepted() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        // checkout day equals the next checkin day: no conflict
        f.use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();
        f.use_case
            .execute(dto(user.id(), room.id(), 5, 8))
            .await
            .unwrap();

        let all = f.reservations.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn cancelled_reservation_frees_the_dates() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        let mut first = f
            .use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();
        first.cancel().unwrap();
        f.reservations.update(first).await.unwrap();

        // same dates are bookable again
        f.use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn creation_does_not_touch_room_status() {
        let f = fixture();
        let user = sample_guest();
        let room = sample_room(100, 2);
        f.users.save(user.clone()).await.unwrap();
        f.rooms.save(room.clone()).await.unwrap();

        f.use_case
            .execute(dto(user.id(), room.id(), 1, 5))
            .await
            .unwrap();

        let stored = f.rooms.find_by_id(room.id()).await.unwrap().unwrap();
        assert!(stored.is_available());
    }
}
