//! Domain layer - Core entities and rules

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{
    check_user, create_user, validate_user, User, UserId, UserRepository, UserStats,
    UserValidationError,
};
