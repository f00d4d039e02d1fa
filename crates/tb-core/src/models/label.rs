use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Board-scoped label, attached to tasks via [`crate::TaskLabel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: Uuid,
    pub board_id: Uuid,
    pub name: String,
    /// CSS-style color string, e.g. "#ff6b6b"
    pub color: String,
}

impl Label {
    pub fn new(board_id: Uuid, name: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            name,
            color,
        }
    }
}
