//! Infrastructure layer - external concerns

pub mod auth;
pub mod memory;

pub use auth::{JwtAuthService, JwtConfig};
pub use memory::{
    InMemoryPaymentRepository, InMemoryRepositoryProvider, InMemoryReservationRepository,
    InMemoryRoomRepository, InMemoryUserRepository,
};
