//! Payment aggregate
//!
//! Contains the Payment entity, related types, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Payment, PaymentMethod, PaymentStatus};
pub use repository::PaymentRepository;
