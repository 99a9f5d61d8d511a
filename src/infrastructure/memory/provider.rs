//! In-memory implementation of RepositoryProvider

use std::sync::Arc;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{PaymentRepository, ReservationRepository, RoomRepository, UserRepository};

use super::payment_repository::InMemoryPaymentRepository;
use super::reservation_repository::InMemoryReservationRepository;
use super::room_repository::InMemoryRoomRepository;
use super::user_repository::InMemoryUserRepository;

/// Unified repository provider backed by in-memory stores.
///
/// Holds one shared handle per aggregate. The `*_repository` accessors
/// hand out clones of those handles for wiring use cases:
///
/// ```ignore
/// let repos = InMemoryRepositoryProvider::new();
/// let create = CreateReservation::new(
///     repos.room_repository(),
///     repos.reservation_repository(),
///     repos.user_repository(),
/// );
/// ```
pub struct InMemoryRepositoryProvider {
    rooms: Arc<InMemoryRoomRepository>,
    reservations: Arc<InMemoryReservationRepository>,
    users: Arc<InMemoryUserRepository>,
    payments: Arc<InMemoryPaymentRepository>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(InMemoryRoomRepository::new()),
            reservations: Arc::new(InMemoryReservationRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            payments: Arc::new(InMemoryPaymentRepository::new()),
        }
    }

    pub fn room_repository(&self) -> Arc<InMemoryRoomRepository> {
        self.rooms.clone()
    }

    pub fn reservation_repository(&self) -> Arc<InMemoryReservationRepository> {
        self.reservations.clone()
    }

    pub fn user_repository(&self) -> Arc<InMemoryUserRepository> {
        self.users.clone()
    }

    pub fn payment_repository(&self) -> Arc<InMemoryPaymentRepository> {
        self.payments.clone()
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rooms(&self) -> &dyn RoomRepository {
        self.rooms.as_ref()
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        self.reservations.as_ref()
    }

    fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    fn payments(&self) -> &dyn PaymentRepository {
        self.payments.as_ref()
    }
}

// ── Tests ──────────────────────────────────────────────────────
