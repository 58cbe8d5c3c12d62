//! Directory snapshots
//!
//! A snapshot is a JSON array of user records, in directory order.

use domain_users::{InMemoryUserDirectory, User};
use eyre::{Result, WrapErr};
use std::path::Path;
use tracing::info;

/// Read a snapshot file into an in-memory directory
pub async fn load(path: &Path) -> Result<InMemoryUserDirectory> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("Failed to read snapshot {}", path.display()))?;

    let directory =
        parse(&raw).wrap_err_with(|| format!("Invalid snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        users = directory.len().await,
        "Loaded user directory snapshot"
    );
    Ok(directory)
}

/// Parse snapshot contents, rejecting duplicate ids
pub fn parse(raw: &str) -> Result<InMemoryUserDirectory> {
    let users: Vec<User> =
        serde_json::from_str(raw).wrap_err("Expected a JSON array of user records")?;

    Ok(InMemoryUserDirectory::from_users(users)?)
}
