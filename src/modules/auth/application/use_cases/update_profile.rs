use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::domain::policy::Actor;
use crate::auth::application::ports::outgoing::{
    UserPatch, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfilePatchError {
    #[error("username must be 3-50 characters of letters, digits, '_' or '-'")]
    InvalidUsername,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("full name must not exceed 100 characters")]
    FullNameTooLong,
}

/// Validates the present fields of a partial profile update. Absent fields
/// stay untouched.
pub fn validate_patch(patch: &UserPatch) -> Result<(), ProfilePatchError> {
    if let Some(username) = &patch.username {
        if username.len() < 3
            || username.len() > 50
            || !username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ProfilePatchError::InvalidUsername);
        }
    }
    if let Some(email) = &patch.email {
        if !EmailAddress::is_valid(email) {
            return Err(ProfilePatchError::InvalidEmail);
        }
    }
    if patch
        .full_name
        .as_deref()
        .is_some_and(|name| name.chars().count() > 100)
    {
        return Err(ProfilePatchError::FullNameTooLong);
    }
    Ok(())
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("user not found")]
    NotFound,

    #[error("not allowed to modify this profile")]
    Forbidden,

    #[error("{0}")]
    InvalidPatch(#[from] ProfilePatchError),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: &Actor,
        target: Uuid,
        patch: UserPatch,
    ) -> Result<UserProfile, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateProfileUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IUpdateProfileUseCase for UpdateProfileUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        actor: &Actor,
        target: Uuid,
        patch: UserPatch,
    ) -> Result<UserProfile, UpdateProfileError> {
        validate_patch(&patch)?;

        // Existence before ownership: a missing id is 404 to everyone.
        let existing = self
            .query
            .find_by_id(target)
            .await
            .map_err(|e| UpdateProfileError::RepositoryError(e.to_string()))?
            .ok_or(UpdateProfileError::NotFound)?;

        actor
            .require_self_or_admin(existing.id)
            .map_err(|_| UpdateProfileError::Forbidden)?;

        if patch.is_empty() {
            return Ok(UserProfile::from(existing));
        }

        let updated = self
            .repository
            .update_user(target, patch)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(UserProfile::from(updated))
    }
}
