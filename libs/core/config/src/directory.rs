use crate::{env_optional, env_or_default, env_parse_or, ConfigError, FromEnv};
use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT_PATH: &str = "users.json";

/// Where the user directory snapshot lives and who is asking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub snapshot_path: PathBuf,
    pub requester_id: Option<String>,
    pub pretty: bool,
}

impl DirectoryConfig {
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            requester_id: None,
            pretty: false,
        }
    }
}

impl FromEnv for DirectoryConfig {
    /// Reads from environment variables:
    /// - USER_DIRECTORY_SNAPSHOT: defaults to "users.json"
    /// - REQUESTER_ID: optional
    /// - OUTPUT_PRETTY: defaults to false
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            snapshot_path: env_or_default("USER_DIRECTORY_SNAPSHOT", DEFAULT_SNAPSHOT_PATH).into(),
            requester_id: env_optional("REQUESTER_ID"),
            pretty: env_parse_or("OUTPUT_PRETTY", false)?,
        })
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_PATH)
    }
}
