//! List Users
//!
//! Loads a user directory snapshot and prints every user as JSON, provided
//! the requester is an administrator.
//!
//! ```text
//! list-users --snapshot apps/users/list-users/users.example.json --requester fake-id --pretty
//! ```

use clap::Parser;
use core_config::directory::DirectoryConfig;
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::{Environment, FromEnv};
use domain_users::{ListAllUsersRequest, ListAllUsersUseCase};
use eyre::{eyre, Result, WrapErr};
use std::path::PathBuf;
use tracing::{error, info};

mod snapshot;

#[derive(Parser, Debug)]
#[command(name = "list-users")]
#[command(about = "List every registered user (administrators only)")]
struct Cli {
    /// Id of the requesting user. Defaults to REQUESTER_ID.
    #[arg(short, long)]
    requester: Option<String>,

    /// Path to the directory snapshot (see users.example.json). Defaults to
    /// USER_DIRECTORY_SNAPSHOT, then users.json.
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Command-line values take precedence over the environment
    fn apply(self, mut config: DirectoryConfig) -> DirectoryConfig {
        if let Some(requester) = self.requester {
            config.requester_id = Some(requester);
        }
        if let Some(snapshot) = self.snapshot {
            config.snapshot_path = snapshot;
        }
        config.pretty |= self.pretty;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let environment = Environment::from_env();
    init_tracing(&environment);

    let cli = Cli::parse();
    let config = cli.apply(DirectoryConfig::from_env()?);

    let output = run(&config).await?;
    println!("{}", output);
    Ok(())
}

/// Load the snapshot, run the listing and render it as JSON.
///
/// A refused listing comes back as an error wrapping `ListAllUsersError`.
async fn run(config: &DirectoryConfig) -> Result<String> {
    let requester_id = config
        .requester_id
        .clone()
        .ok_or_else(|| eyre!("No requester given: pass --requester or set REQUESTER_ID"))?;

    let directory = snapshot::load(&config.snapshot_path).await?;
    let use_case = ListAllUsersUseCase::new(directory);

    match use_case.execute(ListAllUsersRequest::new(requester_id)).await {
        Ok(users) => {
            info!(count = users.len(), "Listing granted");
            let output = if config.pretty {
                serde_json::to_string_pretty(&users)?
            } else {
                serde_json::to_string(&users)?
            };
            Ok(output)
        }
        Err(err) => {
            error!(%err, "Listing refused");
            Err(err).wrap_err("Listing refused")
        }
    }
}
