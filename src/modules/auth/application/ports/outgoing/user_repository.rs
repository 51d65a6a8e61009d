use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}

/// Partial patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.full_name.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("user not found")]
    UserNotFound,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_user(&self, user_id: Uuid, patch: UserPatch)
        -> Result<User, UserRepositoryError>;

    /// Hard delete; returns the removed record.
    async fn delete_user(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;
}
