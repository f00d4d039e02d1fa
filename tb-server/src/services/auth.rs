//! Registration and login.
//!
//! Expected failures (taken email, wrong password) are plain values, not
//! errors: handlers map them to 400/401 without touching the error path.

use crate::ApiResult;

use tb_auth::{TokenIssuer, hash_password, verify_password};
use tb_core::User;
use tb_db::{DbError, SqliteRepository, lookups};

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterFailure {
    EmailInUse,
    UsernameTaken,
}

impl RegisterFailure {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmailInUse => "Email is already in use",
            Self::UsernameTaken => "Username is already taken",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFailure {
    EmailNotFound,
    UserNotFound,
    InvalidPassword,
}

pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Register a new account. Uniqueness is checked before the password is
/// hashed so taken names fail fast.
pub async fn register(
    pool: &SqlitePool,
    new_user: NewUser,
) -> ApiResult<Result<User, RegisterFailure>> {
    let users = SqliteRepository::<User>::new(pool.clone());

    if lookups::user_id_for_email(pool, &new_user.email)
        .await?
        .is_some()
    {
        return Ok(Err(RegisterFailure::EmailInUse));
    }

    let mut query = users.select();
    query
        .push(" WHERE username = ")
        .push_bind(new_user.username.clone());
    if users.fetch_optional(&mut query).await?.is_some() {
        return Ok(Err(RegisterFailure::UsernameTaken));
    }

    let password_hash = hash_password(&new_user.password)?;
    let user = User::new(
        new_user.username,
        new_user.email,
        password_hash,
        new_user.first_name,
        new_user.last_name,
    );

    // A concurrent registration can win between the checks above and this
    // insert; the UNIQUE constraint is the authority either way.
    if let Err(err) = users.add(&user).await {
        if let Some(failure) = register_conflict(&err) {
            return Ok(Err(failure));
        }
        return Err(err.into());
    }

    log::info!("Registered user {} ({})", user.username, user.id);
    Ok(Ok(user))
}

/// Maps a UNIQUE constraint violation on the users table to the matching
/// registration failure.
fn register_conflict(err: &DbError) -> Option<RegisterFailure> {
    let DbError::Sqlx {
        source: sqlx::Error::Database(db_err),
        ..
    } = err
    else {
        return None;
    };

    if !db_err.is_unique_violation() {
        return None;
    }

    if db_err.message().contains("users.username") {
        Some(RegisterFailure::UsernameTaken)
    } else {
        Some(RegisterFailure::EmailInUse)
    }
}

/// Authenticate by email and password. On success updates `last_login_at`
/// and returns a signed token alongside the user.
pub async fn login(
    pool: &SqlitePool,
    issuer: &TokenIssuer,
    email: &str,
    password: &str,
) -> ApiResult<Result<(String, User), LoginFailure>> {
    let Some(user_id) = lookups::user_id_for_email(pool, email).await? else {
        return Ok(Err(LoginFailure::EmailNotFound));
    };

    let users = SqliteRepository::<User>::new(pool.clone());
    let Some(mut user) = users.find_by_id(&user_id).await? else {
        return Ok(Err(LoginFailure::UserNotFound));
    };

    if !verify_password(password, &user.password_hash)? {
        return Ok(Err(LoginFailure::InvalidPassword));
    }

    user.last_login_at = Some(Utc::now());
    users.update(&user).await?;

    let token = issuer.generate_token(&user)?;
    log::debug!("User {} logged in", user.id);

    Ok(Ok((token, user)))
}

/// Update the stored profile photo path, returning the refreshed user.
pub async fn set_photo_path(
    pool: &SqlitePool,
    user_id: Uuid,
    photo_path: String,
) -> ApiResult<Option<User>> {
    let users = SqliteRepository::<User>::new(pool.clone());
    let Some(mut user) = users.find_by_id(&user_id).await? else {
        return Ok(None);
    };

    user.photo_path = Some(photo_path);
    users.update(&user).await?;

    Ok(Some(user))
}
