//! Domain services
//!
//! Business logic that does not belong to a single entity: pricing
//! arithmetic and the authentication capability interface.

pub mod auth;
pub mod pricing;

pub use auth::{AuthService, TokenPayload};
pub use pricing::PricingService;
