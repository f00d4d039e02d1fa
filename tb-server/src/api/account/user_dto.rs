use tb_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub photo_path: Option<String>,
    pub created_at: i64,
    pub last_login_at: Option<i64>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            username: u.username,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            photo_path: u.photo_path,
            created_at: u.created_at.timestamp(),
            last_login_at: u.last_login_at.map(|t| t.timestamp()),
        }
    }
}
