//! In-memory repository implementations
//!
//! DashMap-backed stores matching the repository contracts. Suitable
//! for development and tests; nothing here survives a restart.

pub mod payment_repository;
pub mod provider;
pub mod reservation_repository;
pub mod room_repository;
pub mod user_repository;

pub use payment_repository::InMemoryPaymentRepository;
pub use provider::InMemoryRepositoryProvider;
pub use reservation_repository::InMemoryReservationRepository;
pub use room_repository::InMemoryRoomRepository;
pub use user_repository::InMemoryUserRepository;
