//! # Grandview Hotel Reservation Engine
//!
//! Reservation management core for a hotel: rooms, guests, bookings,
//! and payments, built around date-range availability checks and a
//! guarded reservation state machine.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, value objects and traits
//! - **application**: Use cases, one per business operation
//! - **infrastructure**: External concerns (auth tokens, in-memory storage)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the domain surface for easy access
pub use domain::{
    AuthService, DateRange, DomainError, DomainResult, Email, Money, Payment, PaymentMethod,
    PaymentRepository, PaymentStatus, Permission, PricingService, RepositoryProvider, Reservation,
    ReservationRepository, ReservationStatus, Room, RoomRepository, RoomStatus, RoomType,
    TokenPayload, User, UserRepository, UserRole,
};

pub use application::{
    AuthenticatedUser, CancelReservation, CancelReservationDto, CheckInReservation,
    CheckInReservationDto, CheckOutReservation, CheckOutReservationDto, CreateReservation,
    CreateReservationDto, CreateRoom, CreateRoomDto, LoginUser, LoginUserDto, RegisterUser,
    RegisterUserDto, SearchAvailableRooms, SearchAvailableRoomsDto,
};

pub use infrastructure::{InMemoryRepositoryProvider, JwtAuthService, JwtConfig};
