//! In-memory reservation repository

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{
    DateRange, DomainError, DomainResult, Reservation, ReservationRepository, ReservationStatus,
};

/// DashMap-backed reservation store for development and testing
pub struct InMemoryReservationRepository {
    reservations: DashMap<Uuid, Reservation>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self {
            reservations: DashMap::new(),
        }
    }
}

impl Default for InMemoryReservationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn save(&self, reservation: Reservation) -> DomainResult<()> {
        self.reservations.insert(reservation.id(), reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn update(&self, reservation: Reservation) -> DomainResult<()> {
        if !self.reservations.contains_key(&reservation.id()) {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: reservation.id().to_string(),
            });
        }
        self.reservations.insert(reservation.id(), reservation);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.reservations.remove(&id);
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: Uuid) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|entry| entry.user_id() == user_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_by_room_id(&self, room_id: Uuid) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|entry| entry.room_id() == room_id)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_by_status(&self, status: ReservationStatus) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|entry| entry.status() == status)
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Reservation>> {
        Ok(self.reservations.iter().map(|entry| entry.clone()).collect())
    }

    async fn find_active_reservations_by_room_id(
        &self,
        room_id: Uuid,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|entry| entry.room_id() == room_id && entry.is_active())
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_reservations_by_room_and_date_range(
        &self,
        room_id: Uuid,
        date_range: &DateRange,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|entry| {
                entry.room_id() == room_id
                    && entry.is_active()
                    && entry.date_range().overlaps(date_range)
            })
            .map(|entry| entry.clone())
            .collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
