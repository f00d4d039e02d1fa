use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Board, Label};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for Label {
    type Id = Uuid;

    const TABLE: &'static str = "labels";
    const COLUMNS: &'static [&'static str] = &["id", "board_id", "name", "color"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            board_id: row::uuid_col(r, "board_id")?,
            name: r.try_get("name")?,
            color: r.try_get("color")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.board_id.to_string())
            .bind(self.name.as_str())
            .bind(self.color.as_str())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.board_id.to_string())
            .bind(self.name.as_str())
            .bind(self.color.as_str())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Board> for Label {
    const PARENT_FK: &'static str = "board_id";
    const ORDER_BY: Option<&'static str> = Some("name ASC");
}
