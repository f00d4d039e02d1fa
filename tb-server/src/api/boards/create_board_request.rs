use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    /// Board title (required)
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
