use async_trait::async_trait;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::domain::policy::Actor;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::shared::api::PageParams;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("admin privileges required")]
    Forbidden,

    #[error("query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self, actor: &Actor, page: PageParams)
        -> Result<Vec<UserProfile>, ListUsersError>;
}

pub struct ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListUsersUseCase for ListUsersUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(
        &self,
        actor: &Actor,
        page: PageParams,
    ) -> Result<Vec<UserProfile>, ListUsersError> {
        actor
            .require_admin()
            .map_err(|_| ListUsersError::Forbidden)?;

        let users = self
            .query
            .list(page.skip(), page.limit())
            .await
            .map_err(|e| ListUsersError::QueryError(e.to_string()))?;

        Ok(users.into_iter().map(UserProfile::from).collect())
    }
}
