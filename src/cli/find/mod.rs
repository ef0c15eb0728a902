//! Find command - looks up a user by id in a seed file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use crate::domain::user::{UserId, UserRepository};
use crate::infrastructure::user::{load_users, UserStore};

/// Arguments for the find command
#[derive(Args, Clone)]
pub struct FindArgs {
    /// JSON seed file (overrides registry.seed_file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Id to look up; the earliest matching user wins
    #[arg(long, allow_negative_numbers = true)]
    pub id: UserId,
}

/// Run the find command
pub fn run(args: FindArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();

    let path = super::resolve_seed_file(args.file, &config)?;
    let store = UserStore::with_users(load_users(&path)?);

    match store.find_by_id(args.id) {
        Some(user) => {
            println!("{}", serde_json::to_string_pretty(&user)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("User {} not found", args.id);
            Ok(ExitCode::FAILURE)
        }
    }
}
