//! User validation utilities

use thiserror::Error;

use super::entity::User;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("User name cannot be empty or whitespace")]
    EmptyName,

    #[error("User email must contain '@'")]
    MissingAtSign,
}

/// Check a user's structure, reporting the first rule that fails
///
/// Rules:
/// - Name must be non-empty after trimming surrounding whitespace
/// - Email must contain `@` somewhere (any position, any count)
///
/// The id is never checked.
pub fn check_user(user: &User) -> Result<(), UserValidationError> {
    if user.name().trim().is_empty() {
        return Err(UserValidationError::EmptyName);
    }

    if !user.email().contains('@') {
        return Err(UserValidationError::MissingAtSign);
    }

    Ok(())
}

/// Validate an optional user. An absent user is never valid.
pub fn validate_user(user: Option<&User>) -> bool {
    user.is_some_and(|u| check_user(u).is_ok())
}
