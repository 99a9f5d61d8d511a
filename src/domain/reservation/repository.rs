//! Reservation repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Reservation, ReservationStatus};
use crate::domain::error::DomainResult;
use crate::domain::value_objects::DateRange;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Save a new reservation
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    /// Update an existing reservation
    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    /// Delete a reservation by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    /// Find all reservations made by a user
    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations for a room (any status)
    async fn find_by_room_id(&self, room_id: Uuid) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations in a given status
    async fn find_by_status(&self, status: ReservationStatus) -> DomainResult<Vec<Reservation>>;

    /// Find all reservations
    async fn find_all(&self) -> DomainResult<Vec<Reservation>>;

    /// Find reservations still holding a claim on the room
    async fn find_active_reservations_by_room_id(
        &self,
        room_id: Uuid,
    ) -> DomainResult<Vec<Reservation>>;

    /// Find active reservations for a room whose stay overlaps the window.
    ///
    /// This is the conflict query behind double-booking prevention, so
    /// it must apply the half-open overlap rule exactly: ranges that
    /// merely touch do not conflict.
    async fn find_reservations_by_room_and_date_range(
        &self,
        room_id: Uuid,
        date_range: &DateRange,
    ) -> DomainResult<Vec<Reservation>>;
}
