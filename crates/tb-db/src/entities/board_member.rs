use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Board, BoardMember};

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for BoardMember {
    type Id = Uuid;

    const TABLE: &'static str = "board_members";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "board_id",
        "user_id",
        "role",
        "invited_by",
        "joined_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            board_id: row::uuid_col(r, "board_id")?,
            user_id: row::uuid_col(r, "user_id")?,
            role: row::parsed_col(r, "role")?,
            invited_by: row::opt_uuid_col(r, "invited_by")?,
            joined_at: row::ts_col(r, "joined_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.board_id.to_string())
            .bind(self.user_id.to_string())
            .bind(self.role.as_str())
            .bind(self.invited_by.map(|u| u.to_string()))
            .bind(self.joined_at.timestamp())
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.board_id.to_string())
            .bind(self.user_id.to_string())
            .bind(self.role.as_str())
            .bind(self.invited_by.map(|u| u.to_string()))
            .bind(self.joined_at.timestamp())
            .bind(self.id.to_string())
    }
}

impl ChildOf<Board> for BoardMember {
    const PARENT_FK: &'static str = "board_id";
    const ORDER_BY: Option<&'static str> = Some("joined_at ASC");
}
