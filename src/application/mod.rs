//! Application layer: one use case per business operation
//!
//! Use cases receive plain input DTOs, load entities through the
//! repository traits, let the entities enforce their own invariants,
//! persist the outcome, and hand the entity back to the caller.

pub mod identity;
pub mod reservations;
pub mod rooms;

pub use identity::{AuthenticatedUser, LoginUser, LoginUserDto, RegisterUser, RegisterUserDto};
pub use reservations::{
    CancelReservation, CancelReservationDto, CheckInReservation, CheckInReservationDto,
    CheckOutReservation, CheckOutReservationDto, CreateReservation, CreateReservationDto,
};
pub use rooms::{CreateRoom, CreateRoomDto, SearchAvailableRooms, SearchAvailableRoomsDto};
