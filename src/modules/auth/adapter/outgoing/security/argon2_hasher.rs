use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};

#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        let params = Params::new(4 * 1024, 3, 1, None).expect("Invalid Argon2 params");

        Self { params }
    }

    /// Create with custom params (for testing or different environments)
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        let params =
            Params::new(memory_kib, iterations, parallelism, None).expect("Invalid Argon2 params");

        Self { params }
    }

    /// Environment-based configuration
    pub fn from_env() -> Self {
        let memory_kib: u32 = std::env::var("ARGON2_MEMORY_KIB")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4 * 1024);

        let iterations: u32 = std::env::var("ARGON2_ITERATIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3);

        let parallelism: u32 = std::env::var("ARGON2_PARALLELISM")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        Self::with_params(memory_kib, iterations, parallelism)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_and_verify_password() {
        let hasher = Argon2Hasher::new();
        let password = "SecurePassword123";

        let hashed = hasher
            .hash_password(password)
            .await
            .expect("hashing should succeed");

        let verify_correct = hasher.verify_password(password, &hashed).await;
        assert_eq!(verify_correct, Ok(true));

        let verify_wrong = hasher.verify_password("WrongPassword", &hashed).await;
        assert_eq!(verify_wrong, Ok(false));
    }

    #[tokio::test]
    async fn test_same_password_hashes_differently() {
        let hasher = Argon2Hasher::new();

        let first = hasher.hash_password("repeat-me").await.unwrap();
        let second = hasher.hash_password("repeat-me").await.unwrap();

        // Fresh salt per call; both still verify.
        assert_ne!(first, second);
        assert_eq!(hasher.verify_password("repeat-me", &first).await, Ok(true));
        assert_eq!(hasher.verify_password("repeat-me", &second).await, Ok(true));
    }

    #[tokio::test]
    async fn test_invalid_hash_format_is_an_error() {
        let hasher = Argon2Hasher::new();

        let result = hasher.verify_password("password123", "invalid-hash").await;
        assert_eq!(result, Err(HashError::VerifyFailed));
    }

    #[tokio::test]
    async fn test_tampered_hash_params_error_branch() {
        let hasher = Argon2Hasher::new();

        let valid_hash = hasher.hash_password("password123").await.unwrap();

        let mut parts: Vec<&str> = valid_hash.split('$').collect();
        parts[3] = "m=0,t=0,p=0";
        let tampered_hash = parts.join("$");

        let result = hasher.verify_password("password123", &tampered_hash).await;
        assert_eq!(result, Err(HashError::VerifyFailed));
    }
}
