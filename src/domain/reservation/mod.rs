//! Reservation aggregate
//!
//! Contains the Reservation entity, its status state machine, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Reservation, ReservationStatus};
pub use repository::ReservationRepository;
