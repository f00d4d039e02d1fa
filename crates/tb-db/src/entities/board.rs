use crate::Result as DbErrorResult;
use crate::entity::{Entity, SqliteQuery};
use crate::row;

use tb_core::Board;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Board {
    type Id = Uuid;

    const TABLE: &'static str = "boards";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "owner_id",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            title: r.try_get("title")?,
            description: r.try_get("description")?,
            owner_id: row::uuid_col(r, "owner_id")?,
            created_at: row::ts_col(r, "created_at")?,
            updated_at: row::ts_col(r, "updated_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.title.as_str())
            .bind(self.description.as_deref())
            .bind(self.owner_id.to_string())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.title.as_str())
            .bind(self.description.as_deref())
            .bind(self.owner_id.to_string())
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
            .bind(self.id.to_string())
    }
}
