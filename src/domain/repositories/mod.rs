//! Repository traits for the domain layer

use super::payment::PaymentRepository;
use super::reservation::ReservationRepository;
use super::room::RoomRepository;
use super::user::UserRepository;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Use cases request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let room = repos.rooms().find_by_number("101").await?;
///     let conflicts = repos
///         .reservations()
///         .find_reservations_by_room_and_date_range(room_id, &range)
///         .await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn rooms(&self) -> &dyn RoomRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn users(&self) -> &dyn UserRepository;
    fn payments(&self) -> &dyn PaymentRepository;
}
