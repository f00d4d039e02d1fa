use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_LIFETIME_MINUTES, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Required; no default is generated.
    pub jwt_secret: Option<String>,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    /// Non-positive values fall back to the default at token issue time.
    pub token_lifetime_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            issuer: None,
            audience: None,
            token_lifetime_minutes: DEFAULT_TOKEN_LIFETIME_MINUTES,
        }
    }
}

impl AuthConfig {
    /// A secret shorter than 256 bits is a startup error, not something to
    /// pad into shape.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (set TB_AUTH_JWT_SECRET or config.toml)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_BYTES,
                secret.len()
            )));
        }

        Ok(())
    }
}
