//! Load command - reads a seed file into a fresh store

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::domain::user::{User, UserId, UserRepository, UserStats};
use crate::infrastructure::user::{load_users, UserService, UserStore};

/// Arguments for the load command
#[derive(Args, Clone)]
pub struct LoadArgs {
    /// JSON seed file (overrides registry.seed_file)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Only store users that pass validation
    #[arg(long)]
    pub register: bool,
}

/// Store contents after loading
#[derive(Debug, Serialize)]
struct LoadReport {
    users: Vec<User>,
    stats: UserStats,
    rejected: Vec<Rejected>,
}

#[derive(Debug, Serialize)]
struct Rejected {
    id: UserId,
    reason: String,
}

/// Run the load command
pub fn run(args: LoadArgs) -> anyhow::Result<ExitCode> {
    let config = super::bootstrap();

    let path = super::resolve_seed_file(args.file, &config)?;
    let users = load_users(&path)?;
    let report = populate(users, args.register);

    info!(
        stored = report.stats.total_users,
        rejected = report.rejected.len(),
        "Load complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(ExitCode::SUCCESS)
}

fn populate(users: Vec<User>, register: bool) -> LoadReport {
    let store = Arc::new(UserStore::new());
    let mut rejected = Vec::new();

    if register {
        let service = UserService::new(Arc::clone(&store));

        for user in users {
            let id = user.id();
            if let Err(e) = service.register(user) {
                rejected.push(Rejected {
                    id,
                    reason: e.to_string(),
                });
            }
        }
    } else {
        for user in users {
            store.add(user);
        }
    }

    LoadReport {
        users: store.list(),
        stats: store.stats(),
        rejected,
    }
}
