//! Reservation lifecycle use cases

pub mod cancel_reservation;
pub mod check_in_reservation;
pub mod check_out_reservation;
pub mod create_reservation;

pub use cancel_reservation::{CancelReservation, CancelReservationDto};
pub use check_in_reservation::{CheckInReservation, CheckInReservationDto};
pub use check_out_reservation::{CheckOutReservation, CheckOutReservationDto};
pub use create_reservation::{CreateReservation, CreateReservationDto};
