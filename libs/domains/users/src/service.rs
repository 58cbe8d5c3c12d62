use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::{ListAllUsersError, ListAllUsersResult};
use crate::models::{ListAllUsersRequest, PublicUserView};
use crate::repository::UserDirectory;

/// Lists every user on behalf of an administrator
pub struct ListAllUsersUseCase<D: UserDirectory> {
    directory: Arc<D>,
}

impl<D: UserDirectory> ListAllUsersUseCase<D> {
    pub fn new(directory: D) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }

    /// Reuse a directory that is already shared elsewhere
    pub fn from_shared(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Resolve the requester, require the admin flag, then project the
    /// full listing in directory order.
    ///
    /// The listing is only read once the requester has been found and
    /// authorized; a missing requester is always `UserNotFound`.
    #[instrument(skip(self, request), fields(requester_id = %request.requester_id))]
    pub async fn execute(&self, request: ListAllUsersRequest) -> ListAllUsersResult {
        let Some(requester) = self.directory.find_by_id(&request.requester_id).await else {
            debug!("Requester not found");
            return Err(ListAllUsersError::UserNotFound(request.requester_id));
        };

        if !requester.is_admin {
            warn!("Requester is not an administrator");
            return Err(ListAllUsersError::UserIsNotAdmin);
        }

        let users: Vec<PublicUserView> = self
            .directory
            .list_all()
            .await
            .into_iter()
            .map(PublicUserView::from)
            .collect();

        info!(count = users.len(), "Listed users");
        Ok(users)
    }
}

impl<D: UserDirectory> Clone for ListAllUsersUseCase<D> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
        }
    }
}
