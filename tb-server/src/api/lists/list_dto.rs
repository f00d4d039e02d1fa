use tb_core::List;

use serde::Serialize;

/// List DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ListDto {
    pub id: String,
    pub board_id: String,
    pub title: String,
    pub position: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<List> for ListDto {
    fn from(l: List) -> Self {
        Self {
            id: l.id.to_string(),
            board_id: l.board_id.to_string(),
            title: l.title,
            position: l.position,
            created_at: l.created_at.timestamp(),
            updated_at: l.updated_at.timestamp(),
        }
    }
}
