use crate::models::task_priority::TaskPriority;
use crate::models::task_status::TaskStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub list_id: Uuid,

    // Core fields
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,

    // Workflow
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub position: i32,

    // Ownership & audit
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        list_id: Uuid,
        title: String,
        description: Option<String>,
        owner_id: Uuid,
        position: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            list_id,
            title,
            description,
            due_date: None,
            priority: TaskPriority::default(),
            status: TaskStatus::default(),
            position,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }
}
