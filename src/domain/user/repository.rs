//! User repository trait

use serde::Serialize;

use super::entity::{User, UserId};
use super::validation::validate_user;

#[cfg(test)]
use mockall::automock;

/// Aggregate counts over a repository's contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UserStats {
    pub total_users: usize,
    pub valid_users: usize,
}

/// Append-only user storage
///
/// Implementations keep insertion order, accept duplicates and never validate.
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// Append a user, returning the new total count
    fn add(&self, user: User) -> usize;

    /// Snapshot of all users in insertion order
    fn list(&self) -> Vec<User>;

    /// First user with the given id, in insertion order
    fn find_by_id(&self, id: UserId) -> Option<User>;

    /// Number of stored users
    fn count(&self) -> usize {
        self.list().len()
    }

    /// Total and structurally valid user counts
    fn stats(&self) -> UserStats {
        let users = self.list();

        UserStats {
            total_users: users.len(),
            valid_users: users.iter().filter(|&u| validate_user(Some(u))).count(),
        }
    }
}
