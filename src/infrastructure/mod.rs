//! Infrastructure layer - Storage and runtime implementations

pub mod logging;
pub mod user;
