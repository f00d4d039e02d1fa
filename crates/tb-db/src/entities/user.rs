use crate::Result as DbErrorResult;
use crate::entity::{Entity, SqliteQuery};
use crate::row;

use tb_core::User;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for User {
    type Id = Uuid;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "username",
        "email",
        "password_hash",
        "first_name",
        "last_name",
        "photo_path",
        "created_at",
        "last_login_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            username: r.try_get("username")?,
            email: r.try_get("email")?,
            password_hash: r.try_get("password_hash")?,
            first_name: r.try_get("first_name")?,
            last_name: r.try_get("last_name")?,
            photo_path: r.try_get("photo_path")?,
            created_at: row::ts_col(r, "created_at")?,
            last_login_at: row::opt_ts_col(r, "last_login_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.username.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(self.photo_path.as_deref())
            .bind(self.created_at.timestamp())
            .bind(self.last_login_at.map(|t| t.timestamp()))
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.username.as_str())
            .bind(self.email.as_str())
            .bind(self.password_hash.as_str())
            .bind(self.first_name.as_str())
            .bind(self.last_name.as_str())
            .bind(self.photo_path.as_deref())
            .bind(self.created_at.timestamp())
            .bind(self.last_login_at.map(|t| t.timestamp()))
            .bind(self.id.to_string())
    }
}
