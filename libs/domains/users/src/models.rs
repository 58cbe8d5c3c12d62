use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as held by a directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, immutable identifier
    pub id: String,
    /// User display name
    pub name: String,
    /// User email
    pub email: String,
    /// Password hash (never exposed outside the directory)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Administrator privilege
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Create a regular (non-admin) user with both timestamps set to now
    pub fn new(id: String, name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
            is_admin: false,
        }
    }

    /// Grant or revoke the administrator flag
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// Public view of a user (without password_hash and is_admin)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for PublicUserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Input for listing every user on behalf of a requester
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListAllUsersRequest {
    pub requester_id: String,
}

impl ListAllUsersRequest {
    pub fn new(requester_id: impl Into<String>) -> Self {
        Self {
            requester_id: requester_id.into(),
        }
    }
}
