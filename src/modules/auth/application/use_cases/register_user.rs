use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository,
};

// ========================= Register Command =========================

/// Validated registration payload; construction is the only way in, so a
/// value of this type is always well-formed.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    password: String,
    full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterCommandError {
    #[error("username must be 3-50 characters of letters, digits, '_' or '-'")]
    InvalidUsername,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least 8 characters")]
    PasswordTooShort,

    #[error("full name must not exceed 100 characters")]
    FullNameTooLong,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        password: String,
        full_name: Option<String>,
    ) -> Result<Self, RegisterCommandError> {
        let username = username.trim().to_string();
        if username.len() < 3
            || username.len() > 50
            || !username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(RegisterCommandError::InvalidUsername);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterCommandError::InvalidEmail);
        }

        if password.len() < 8 {
            return Err(RegisterCommandError::PasswordTooShort);
        }

        let full_name = full_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        if full_name
            .as_deref()
            .is_some_and(|name| name.chars().count() > 100)
        {
            return Err(RegisterCommandError::FullNameTooLong);
        }

        Ok(Self {
            username,
            email,
            password,
            full_name,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("username already registered")]
    UsernameTaken,

    #[error("email already registered")]
    EmailTaken,

    #[error("password hashing failed: {0}")]
    HashingFailed(String),

    #[error("repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<UserProfile, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<UserProfile, RegisterUserError> {
        let existing = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        let existing = self
            .query
            .find_by_email(&command.email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .insert_user(CreateUserData {
                username: command.username,
                email: command.email,
                password_hash,
                full_name: command.full_name,
            })
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        Ok(UserProfile::from(user))
    }
}
