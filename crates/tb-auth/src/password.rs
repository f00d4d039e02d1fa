//! Password hashing with Argon2id.
//!
//! Verification failure on a wrong password is not an error; only hash
//! parsing or hashing machinery problems surface as [`AuthError`].

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use error_location::ErrorLocation;

/// Hash a plaintext password with a fresh random salt.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let location = ErrorLocation::from(Location::caller());
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location,
        })?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC-format hash.
#[track_caller]
pub fn verify_password(password: &str, stored_hash: &str) -> AuthErrorResult<bool> {
    let location = ErrorLocation::from(Location::caller());

    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::PasswordHash {
        message: format!("stored hash is malformed: {e}"),
        location,
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::PasswordHash {
            message: e.to_string(),
            location,
        }),
    }
}
