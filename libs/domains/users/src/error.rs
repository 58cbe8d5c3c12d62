use thiserror::Error;

use crate::models::PublicUserView;

/// Failures returned by the list-all-users operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListAllUsersError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User is not an administrator")]
    UserIsNotAdmin,
}

pub type ListAllUsersResult = Result<Vec<PublicUserView>, ListAllUsersError>;

/// Errors raised by directory implementations when they are populated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("User with id '{0}' already exists")]
    DuplicateId(String),
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
