//! User service for validated registration

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::user::{check_user, User, UserId, UserRepository, UserStats};
use crate::domain::DomainError;

/// Validates users before handing them to a repository
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate and store a user, returning the new total count
    pub fn register(&self, user: User) -> Result<usize, DomainError> {
        info!(id = user.id(), name = %user.name(), "Registering user");

        if let Err(e) = check_user(&user) {
            warn!(id = user.id(), error = %e, "Rejected user");
            return Err(DomainError::validation(e.to_string()));
        }

        let count = self.repository.add(user);
        debug!(count, "User stored");

        Ok(count)
    }

    /// Get the first user with the given id
    pub fn get(&self, id: UserId) -> Option<User> {
        self.repository.find_by_id(id)
    }

    /// List all users in insertion order
    pub fn list(&self) -> Vec<User> {
        self.repository.list()
    }

    /// Total and valid user counts
    pub fn stats(&self) -> UserStats {
        self.repository.stats()
    }
}
