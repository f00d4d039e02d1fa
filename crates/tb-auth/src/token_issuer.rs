use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tb_core::User;

/// Minimum signing key size for HS256 (256 bits).
pub const MIN_KEY_BYTES: usize = 32;

/// Token lifetime used when the configured value is missing or non-positive.
pub const DEFAULT_LIFETIME_MINUTES: i64 = 60;

/// Issues signed HS256 access tokens for authenticated users.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    lifetime: Duration,
    issuer: Option<String>,
    audience: Option<String>,
}

impl TokenIssuer {
    /// Create an issuer from a symmetric secret.
    ///
    /// A secret shorter than 256 bits is rejected outright rather than
    /// padded, since a padded key has less entropy than HS256 assumes.
    #[track_caller]
    pub fn new(
        secret: &[u8],
        lifetime_minutes: i64,
        issuer: Option<String>,
        audience: Option<String>,
    ) -> AuthErrorResult<Self> {
        if secret.len() < MIN_KEY_BYTES {
            return Err(AuthError::WeakSigningKey {
                bytes: secret.len(),
                min: MIN_KEY_BYTES,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let minutes = if lifetime_minutes > 0 {
            lifetime_minutes
        } else {
            DEFAULT_LIFETIME_MINUTES
        };

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            lifetime: Duration::minutes(minutes),
            issuer,
            audience,
        })
    }

    /// Issue a token for the user, expiring one lifetime from now.
    pub fn generate_token(&self, user: &User) -> AuthErrorResult<String> {
        self.generate_at(user, Utc::now())
    }

    #[track_caller]
    pub(crate) fn generate_at(&self, user: &User, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.display_name(),
            exp: (now + self.lifetime).timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn lifetime_minutes(&self) -> i64 {
        self.lifetime.num_minutes()
    }
}
