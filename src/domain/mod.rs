//! Domain layer: entities, value objects, and the contracts they need
//!
//! Nothing in this layer performs I/O. Repositories and the auth
//! capability are traits implemented by the infrastructure layer.

pub mod error;
pub mod payment;
pub mod repositories;
pub mod reservation;
pub mod room;
pub mod services;
pub mod user;
pub mod value_objects;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use payment::{Payment, PaymentMethod, PaymentRepository, PaymentStatus};
pub use repositories::RepositoryProvider;
pub use reservation::{Reservation, ReservationRepository, ReservationStatus};
pub use room::{Room, RoomRepository, RoomStatus, RoomType};
pub use services::{AuthService, PricingService, TokenPayload};
pub use user::{Permission, User, UserRepository, UserRole};
pub use value_objects::{DateRange, Email, Money};
