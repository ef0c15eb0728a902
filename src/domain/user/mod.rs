//! User domain
//!
//! This module provides the user entity, its factory and validator, and the
//! repository trait implemented by the in-memory store.

mod entity;
mod repository;
mod validation;

pub use entity::{create_user, User, UserId};
pub use repository::{UserRepository, UserStats};
pub use validation::{check_user, validate_user, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
