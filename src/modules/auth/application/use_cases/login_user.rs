use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider, UserQuery};

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately the same error.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Credentials were correct, but the account is deactivated. Reported
    /// distinctly (403) from bad credentials (401).
    #[error("inactive user")]
    InactiveUser,

    #[error("password verification failed: {0}")]
    VerificationFailed(String),

    #[error("token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginUserResponse, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    query: Q,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(query: Q, hasher: Arc<dyn PasswordHasher>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            query,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let matches = self
            .hasher
            .verify_password(&command.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        // Credentials check first, active check second: an attacker probing
        // a deactivated account still has to know the password before
        // learning the account state.
        if !user.is_active {
            return Err(LoginError::InactiveUser);
        }

        let access_token = self
            .tokens
            .issue_access_token(&user.username)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginUserResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: UserProfile::from(user),
        })
    }
}
