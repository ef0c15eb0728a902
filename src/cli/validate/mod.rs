//! Validate command - checks one user built from flags

use std::process::ExitCode;

use clap::Args;

use crate::domain::user::{check_user, create_user, User, UserId};

/// Arguments for the validate command
#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// User id (not checked by validation)
    #[arg(long, allow_negative_numbers = true)]
    pub id: UserId,

    /// User name
    #[arg(long, default_value = "")]
    pub name: String,

    /// User email
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    super::bootstrap();

    let user = create_user(args.id, &args.name, &args.email);
    println!("{}", verdict(&user));

    if user.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn verdict(user: &User) -> String {
    match check_user(user) {
        Ok(()) => "valid".to_string(),
        Err(e) => format!("invalid: {}", e),
    }
}
