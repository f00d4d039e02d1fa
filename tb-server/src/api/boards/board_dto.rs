use tb_core::Board;

use serde::Serialize;

/// Board DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct BoardDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Board> for BoardDto {
    fn from(b: Board) -> Self {
        Self {
            id: b.id.to_string(),
            title: b.title,
            description: b.description,
            owner_id: b.owner_id.to_string(),
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
