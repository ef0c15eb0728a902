//! User entity and factory

use serde::{Deserialize, Serialize};

use super::validation::check_user;

/// User identifier - caller-supplied, not required to be unique
pub type UserId = i64;

/// User record
///
/// Fields are only readable once constructed. Name and email are not checked
/// here; see [`check_user`](super::check_user) for the structural rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Create a new user without validation
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Human readable summary, `"<name> (<email>)"`
    pub fn info(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    /// Check if the user passes structural validation
    pub fn is_valid(&self) -> bool {
        check_user(self).is_ok()
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.info())
    }
}

/// Build a user from raw fields. Always succeeds; the result may be invalid.
pub fn create_user(id: UserId, name: &str, email: &str) -> User {
    User::new(id, name, email)
}
