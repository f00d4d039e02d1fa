use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Board, List};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for List {
    type Id = Uuid;

    const TABLE: &'static str = "lists";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "board_id",
        "title",
        "position",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            board_id: row::uuid_col(r, "board_id")?,
            title: r.try_get("title")?,
            position: r.try_get("position")?,
            created_at: row::ts_col(r, "created_at")?,
            updated_at: row::ts_col(r, "updated_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.board_id.to_string())
            .bind(self.title.as_str())
            .bind(self.position)
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.board_id.to_string())
            .bind(self.title.as_str())
            .bind(self.position)
            .bind(self.created_at.timestamp())
            .bind(self.updated_at.timestamp())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Board> for List {
    const PARENT_FK: &'static str = "board_id";
    const ORDER_BY: Option<&'static str> = Some("position ASC");
}
