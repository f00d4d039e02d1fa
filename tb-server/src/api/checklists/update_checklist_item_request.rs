use serde::Deserialize;

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateChecklistItemRequest {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub position: Option<i32>,

    #[serde(default)]
    pub is_checked: Option<bool>,
}
