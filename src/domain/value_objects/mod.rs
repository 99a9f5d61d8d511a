//! Value objects
//!
//! Immutable, self-validating primitives shared by every aggregate.

pub mod date_range;
pub mod email;
pub mod money;

pub use date_range::DateRange;
pub use email::Email;
pub use money::Money;
