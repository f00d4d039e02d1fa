use tb_core::BoardMember;

use serde::Serialize;

/// Board member DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct MemberDto {
    pub id: String,
    pub board_id: String,
    pub user_id: String,
    pub role: String,
    pub invited_by: Option<String>,
    pub joined_at: i64,
}

impl From<BoardMember> for MemberDto {
    fn from(m: BoardMember) -> Self {
        Self {
            id: m.id.to_string(),
            board_id: m.board_id.to_string(),
            user_id: m.user_id.to_string(),
            role: m.role.as_str().to_string(),
            invited_by: m.invited_by.map(|u| u.to_string()),
            joined_at: m.joined_at.timestamp(),
        }
    }
}
