//! JSON seed file loading

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::user::User;
use crate::domain::DomainError;

/// Read users from a JSON array of `{"id", "name", "email"}` objects
///
/// Users are returned in file order and are not validated.
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<User>, DomainError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading user seed file");

    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            DomainError::not_found(format!("Seed file '{}' not found", path.display()))
        }
        _ => DomainError::storage(format!(
            "Failed to read seed file '{}': {}",
            path.display(),
            e
        )),
    })?;

    let users: Vec<User> = serde_json::from_str(&contents).map_err(|e| {
        DomainError::storage(format!(
            "Failed to parse seed file '{}': {}",
            path.display(),
            e
        ))
    })?;

    info!(path = %path.display(), count = users.len(), "Loaded users from seed file");

    Ok(users)
}
