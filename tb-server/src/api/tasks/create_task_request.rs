use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Due date as a unix timestamp in seconds
    #[serde(default)]
    pub due_date: Option<i64>,

    /// One of "low", "medium", "high", "critical"; defaults to "medium"
    #[serde(default)]
    pub priority: Option<String>,

    /// One of "todo", "in_progress", "in_review", "done", "archived";
    /// defaults to "todo"
    #[serde(default)]
    pub status: Option<String>,
}
