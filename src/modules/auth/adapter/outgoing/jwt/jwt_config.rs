use jsonwebtoken::Algorithm;

use crate::shared::config::AppConfig;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
}

impl JwtConfig {
    /// Built once at startup from the loaded configuration; an unknown
    /// algorithm name falls back to HS256.
    pub fn from_app_config(config: &AppConfig) -> Self {
        let algorithm = config
            .token_algorithm
            .parse::<Algorithm>()
            .unwrap_or(Algorithm::HS256);

        Self {
            secret_key: config.secret_key.clone(),
            algorithm,
            access_token_expire_minutes: config.access_token_expire_minutes,
        }
    }
}
