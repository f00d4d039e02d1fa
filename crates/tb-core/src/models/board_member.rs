use crate::models::board_role::BoardRole;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's role-scoped membership in a board.
///
/// (user, board) pairs are unique per board; the board owner is treated as
/// an implicit admin and does not need a membership row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardMember {
    pub id: Uuid,
    pub board_id: Uuid,
    pub user_id: Uuid,
    pub role: BoardRole,
    pub invited_by: Option<Uuid>,
    pub joined_at: DateTime<Utc>,
}

impl BoardMember {
    pub fn new(board_id: Uuid, user_id: Uuid, role: BoardRole, invited_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            user_id,
            role,
            invited_by,
            joined_at: Utc::now(),
        }
    }

    /// True if this membership grants at least `min`.
    pub fn has_role(&self, min: BoardRole) -> bool {
        self.role >= min
    }
}
