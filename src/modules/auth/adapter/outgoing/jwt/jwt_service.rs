use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::jwt_config::JwtConfig;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    sub: String,
    exp: i64,
}

/// Signed-token service. Keys are derived once from the configured secret;
/// the service holds no mutable state and is shared across workers.
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        let expiration =
            Utc::now() + Duration::minutes(self.config.access_token_expire_minutes);
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: expiration.timestamp(),
        };

        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.config.algorithm);
        // Expiry is enforced manually so it maps to a distinct error.
        validation.validate_exp = false;

        let decoded = decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if decoded.claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(TokenClaims {
            sub: decoded.claims.sub,
            exp: decoded.claims.exp,
        })
    }
}
