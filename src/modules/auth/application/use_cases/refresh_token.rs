use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::helpers::{CurrentUserResolver, ResolveUserError};
use crate::auth::application::ports::outgoing::TokenProvider;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    #[error("unknown user")]
    UnknownUser,

    #[error("inactive user")]
    InactiveUser,

    #[error("token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Re-issues a token for an already-authenticated identity, extending the
/// session without asking for credentials again.
#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self, username: &str) -> Result<TokenResponse, RefreshError>;
}

pub struct RefreshTokenUseCase {
    resolver: Arc<dyn CurrentUserResolver>,
    tokens: Arc<dyn TokenProvider>,
}

impl RefreshTokenUseCase {
    pub fn new(resolver: Arc<dyn CurrentUserResolver>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { resolver, tokens }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(&self, username: &str) -> Result<TokenResponse, RefreshError> {
        let user = self.resolver.resolve(username).await.map_err(|e| match e {
            ResolveUserError::UnknownUser => RefreshError::UnknownUser,
            ResolveUserError::InactiveUser => RefreshError::InactiveUser,
            ResolveUserError::QueryError(msg) => RefreshError::QueryError(msg),
        })?;

        let access_token = self
            .tokens
            .issue_access_token(&user.username)
            .map_err(|e| RefreshError::TokenGenerationFailed(e.to_string()))?;

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }
}
