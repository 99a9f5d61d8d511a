//! Account registration and sign-in use cases

pub mod login_user;
pub mod register_user;

pub use login_user::{LoginUser, LoginUserDto};
pub use register_user::{AuthenticatedUser, RegisterUser, RegisterUserDto};
