use crate::Result as DbErrorResult;
use crate::entity::{ChildOf, Entity, SqliteQuery};
use crate::row;

use tb_core::{Checklist, ChecklistItem};

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

impl Entity for ChecklistItem {
    type Id = Uuid;

    const TABLE: &'static str = "checklist_items";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "checklist_id",
        "content",
        "position",
        "is_checked",
        "completed_by",
        "completed_at",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_row(r: &SqliteRow) -> DbErrorResult<Self> {
        Ok(Self {
            id: row::uuid_col(r, "id")?,
            checklist_id: row::uuid_col(r, "checklist_id")?,
            content: r.try_get("content")?,
            position: r.try_get("position")?,
            is_checked: r.try_get("is_checked")?,
            completed_by: row::opt_uuid_col(r, "completed_by")?,
            completed_at: row::opt_ts_col(r, "completed_at")?,
        })
    }

    fn bind_insert<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id.to_string())
            .bind(self.checklist_id.to_string())
            .bind(self.content.as_str())
            .bind(self.position)
            .bind(self.is_checked)
            .bind(self.completed_by.map(|u| u.to_string()))
            .bind(self.completed_at.map(|t| t.timestamp()))
    }

    fn bind_update<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.checklist_id.to_string())
            .bind(self.content.as_str())
            .bind(self.position)
            .bind(self.is_checked)
            .bind(self.completed_by.map(|u| u.to_string()))
            .bind(self.completed_at.map(|t| t.timestamp()))
            .bind(self.id.to_string())
    }
}

impl ChildOf<Checklist> for ChecklistItem {
    const PARENT_FK: &'static str = "checklist_id";
    const ORDER_BY: Option<&'static str> = Some("position ASC");
}
