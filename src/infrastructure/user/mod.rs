//! User infrastructure module
//!
//! This module provides the in-memory user store, JSON seed loading and the
//! validating user service.

mod loader;
mod repository;
mod service;

pub use loader::load_users;
pub use repository::UserStore;
pub use service::UserService;
