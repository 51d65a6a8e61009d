use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::domain::policy::Actor;
use crate::auth::application::ports::outgoing::{
    UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("user not found")]
    NotFound,

    #[error("not allowed to delete this profile")]
    Forbidden,

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, target: Uuid)
        -> Result<UserProfile, DeleteUserError>;
}

pub struct DeleteUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IDeleteUserUseCase for DeleteUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, actor: &Actor, target: Uuid) -> Result<UserProfile, DeleteUserError> {
        let existing = self
            .query
            .find_by_id(target)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::NotFound)?;

        actor
            .require_self_or_admin(existing.id)
            .map_err(|_| DeleteUserError::Forbidden)?;

        let deleted = self
            .repository
            .delete_user(target)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::NotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        Ok(UserProfile::from(deleted))
    }
}
