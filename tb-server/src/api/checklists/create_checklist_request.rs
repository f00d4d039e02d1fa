use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateChecklistRequest {
    /// Checklist title (required)
    pub title: String,
}
