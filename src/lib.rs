//! User Registry
//!
//! A minimal in-memory registry for user records:
//! - Append-only store with insertion-ordered listing and lookup by id
//! - Stateless user factory and structural validator
//! - Validating service, JSON seed loading and a small CLI

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    check_user, create_user, validate_user, DomainError, User, UserId, UserRepository, UserStats,
    UserValidationError,
};
pub use infrastructure::user::{load_users, UserService, UserStore};
