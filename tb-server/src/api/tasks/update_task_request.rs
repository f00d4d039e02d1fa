use serde::Deserialize;

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Due date as a unix timestamp in seconds
    #[serde(default)]
    pub due_date: Option<i64>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}
