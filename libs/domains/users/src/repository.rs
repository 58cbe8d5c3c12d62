use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::User;

/// Read-only directory of user records
///
/// Implementations can be backed by memory, files or a remote store.
/// Both methods must be safe to call concurrently.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Get a user by ID; absence is a normal outcome
    async fn find_by_id(&self, id: &str) -> Option<User>;

    /// List every stored user in the store's natural order
    async fn list_all(&self) -> Vec<User>;
}

/// In-memory implementation of UserDirectory, ordered by insertion
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a directory from existing records, keeping their order
    pub fn from_users(users: Vec<User>) -> DirectoryResult<Self> {
        {
            let mut seen = HashSet::with_capacity(users.len());
            if let Some(duplicate) = users.iter().find(|u| !seen.insert(u.id.as_str())) {
                return Err(DirectoryError::DuplicateId(duplicate.id.clone()));
            }
        }

        Ok(Self {
            users: Arc::new(RwLock::new(users)),
        })
    }

    /// Append a user; ids must be unique
    pub async fn create(&self, user: User) -> DirectoryResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.id == user.id) {
            return Err(DirectoryError::DuplicateId(user.id));
        }

        users.push(user.clone());

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.id == id).cloned()
    }

    async fn list_all(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User::new(
            id.to_string(),
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "hashed_password".to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let directory = InMemoryUserDirectory::new();

        let created = directory.create(user("fake-id", "Admin")).await.unwrap();
        assert_eq!(created.email, "admin@example.com");

        let fetched = directory.find_by_id("fake-id").await;
        assert_eq!(fetched, Some(created));

        assert!(directory.find_by_id("invalid-id").await.is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let directory = InMemoryUserDirectory::new();

        for (id, name) in [("c", "Carol"), ("a", "Alice"), ("b", "Bob")] {
            directory.create(user(id, name)).await.unwrap();
        }

        let ids: Vec<String> = directory
            .list_all()
            .await
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_list_all_on_empty_directory() {
        let directory = InMemoryUserDirectory::new();

        assert!(directory.list_all().await.is_empty());
        assert!(directory.is_empty().await);
    }

    #[tokio::test]
    async fn test_duplicate_id_error() {
        let directory = InMemoryUserDirectory::new();
        directory.create(user("fake-id", "Admin")).await.unwrap();

        let result = directory.create(user("fake-id", "Other")).await;
        assert_eq!(
            result,
            Err(DirectoryError::DuplicateId("fake-id".to_string()))
        );

        // The original record is untouched
        assert_eq!(directory.len().await, 1);
        let stored = directory.find_by_id("fake-id").await.unwrap();
        assert_eq!(stored.name, "Admin");
    }

    #[test]
    fn test_from_users_rejects_duplicates() {
        let result = InMemoryUserDirectory::from_users(vec![
            user("fake-id", "Admin"),
            user("fake-id2", "User"),
            user("fake-id", "Again"),
        ]);

        assert!(matches!(result, Err(DirectoryError::DuplicateId(id)) if id == "fake-id"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let directory = InMemoryUserDirectory::from_users(vec![user("fake-id", "Admin")]).unwrap();
        let shared = directory.clone();

        shared.create(user("fake-id2", "User")).await.unwrap();

        assert_eq!(directory.len().await, 2);
        assert!(directory.find_by_id("fake-id2").await.is_some());
    }
}
