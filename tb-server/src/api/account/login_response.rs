use crate::UserDto;
use serde::Serialize;

/// Successful login: the bearer token plus the authenticated user
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}
