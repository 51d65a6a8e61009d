use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserError {
    /// Token subject no longer maps to a user row.
    #[error("unknown user")]
    UnknownUser,

    /// The account exists but has been deactivated; a valid token does not
    /// override that.
    #[error("inactive user")]
    InactiveUser,

    #[error("query error: {0}")]
    QueryError(String),
}

/// Turns a verified token subject into the current user. Every protected
/// request goes through this, so deactivating an account takes effect on
/// the next request even for tokens issued earlier.
#[async_trait]
pub trait CurrentUserResolver: Send + Sync {
    async fn resolve(&self, username: &str) -> Result<User, ResolveUserError>;
}

#[derive(Debug, Clone)]
pub struct UserQueryResolver<Q>
where
    Q: UserQuery,
{
    query: Q,
}

impl<Q> UserQueryResolver<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> CurrentUserResolver for UserQueryResolver<Q>
where
    Q: UserQuery,
{
    async fn resolve(&self, username: &str) -> Result<User, ResolveUserError> {
        let user = self
            .query
            .find_by_username(username)
            .await
            .map_err(|e| ResolveUserError::QueryError(e.to_string()))?
            .ok_or(ResolveUserError::UnknownUser)?;

        if !user.is_active {
            return Err(ResolveUserError::InactiveUser);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use chrono::Utc;
    use uuid::Uuid;

    struct MockUserQuery {
        user: Option<User>,
        should_fail: bool,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
            if self.should_fail {
                return Err(UserQueryError::DatabaseError("connection lost".to_string()));
            }
            Ok(self
                .user
                .clone()
                .filter(|user| user.username == username))
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(None)
        }

        async fn list(&self, _skip: u64, _limit: u64) -> Result<Vec<User>, UserQueryError> {
            Ok(vec![])
        }
    }

    fn test_user(is_active: bool) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: None,
            is_active,
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_resolve_active_user() {
        let resolver = UserQueryResolver::new(MockUserQuery {
            user: Some(test_user(true)),
            should_fail: false,
        });

        let user = resolver.resolve("alice").await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn test_resolve_unknown_user() {
        let resolver = UserQueryResolver::new(MockUserQuery {
            user: None,
            should_fail: false,
        });

        let result = resolver.resolve("ghost").await;
        assert!(matches!(result, Err(ResolveUserError::UnknownUser)));
    }

    #[tokio::test]
    async fn test_resolve_inactive_user_is_rejected() {
        let resolver = UserQueryResolver::new(MockUserQuery {
            user: Some(test_user(false)),
            should_fail: false,
        });

        let result = resolver.resolve("alice").await;
        assert!(matches!(result, Err(ResolveUserError::InactiveUser)));
    }

    #[tokio::test]
    async fn test_resolve_query_error() {
        let resolver = UserQueryResolver::new(MockUserQuery {
            user: None,
            should_fail: true,
        });

        let result = resolver.resolve("alice").await;
        assert!(matches!(result, Err(ResolveUserError::QueryError(_))));
    }
}
