use tb_core::Label;

use serde::Serialize;

/// Label DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct LabelDto {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub color: String,
}

impl From<Label> for LabelDto {
    fn from(l: Label) -> Self {
        Self {
            id: l.id.to_string(),
            board_id: l.board_id.to_string(),
            name: l.name,
            color: l.color,
        }
    }
}
