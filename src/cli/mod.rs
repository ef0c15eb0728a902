//! CLI module for the user registry
//!
//! Provides subcommands for working with users:
//! - `validate`: check a single user built from flags
//! - `load`: read a seed file into a store and report its contents
//! - `find`: look a user up by id in a seed file

pub mod find;
pub mod load;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// User registry - register, list and validate user records
#[derive(Parser)]
#[command(name = "user-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a single user
    Validate(validate::ValidateArgs),

    /// Load users from a JSON seed file and print the store
    Load(load::LoadArgs),

    /// Find the first user with an id in a JSON seed file
    Find(find::FindArgs),
}

/// Load `.env` and configuration, then install logging
fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}

/// Pick the seed file from the command line, falling back to configuration
fn resolve_seed_file(file: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf, DomainError> {
    file.or_else(|| config.registry.seed_file.as_ref().map(PathBuf::from))
        .ok_or_else(|| {
            DomainError::configuration("No seed file given; pass --file or set registry.seed_file")
        })
}
