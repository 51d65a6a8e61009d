use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchUserError {
    #[error("user not found")]
    NotFound,

    #[error("query error: {0}")]
    QueryError(String),
}

/// Public single-user reads, by id or by username.
#[async_trait]
pub trait IFetchUserUseCase: Send + Sync {
    async fn by_id(&self, user_id: Uuid) -> Result<UserProfile, FetchUserError>;

    async fn by_username(&self, username: &str) -> Result<UserProfile, FetchUserError>;
}

pub struct FetchUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> FetchUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchUserUseCase for FetchUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn by_id(&self, user_id: Uuid) -> Result<UserProfile, FetchUserError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::NotFound)?;

        Ok(UserProfile::from(user))
    }

    async fn by_username(&self, username: &str) -> Result<UserProfile, FetchUserError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| FetchUserError::QueryError(e.to_string()))?
            .ok_or(FetchUserError::NotFound)?;

        Ok(UserProfile::from(user))
    }
}
