#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Username of the authenticated user.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token is invalid")]
    Invalid,

    #[error("token signing failed: {0}")]
    SigningFailed(String),
}

/// Session token port. Implementations are stateless; validation is safe
/// under arbitrary concurrency.
pub trait TokenProvider: Send + Sync {
    fn issue_access_token(&self, subject: &str) -> Result<String, TokenError>;

    /// Any defect — bad signature, malformed payload, past expiry — rejects.
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
