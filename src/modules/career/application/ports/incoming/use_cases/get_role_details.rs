use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::career::application::domain::RoleDetails;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GetRoleDetailsError {
    #[error("Role not found")]
    RoleNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetRoleDetailsUseCase: Send + Sync {
    async fn execute(
        &self,
        role_id: Uuid,
        user_id: UserId,
    ) -> Result<RoleDetails, GetRoleDetailsError>;
}
