use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("password hashing failed")]
    HashFailed,

    #[error("hash verification failed")]
    VerifyFailed,

    #[error("blocking task failed")]
    TaskFailed,
}

/// Credential store port. Hashing must salt per call (two hashes of the
/// same password differ); a wrong password verifies to `Ok(false)`, never
/// an error.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
