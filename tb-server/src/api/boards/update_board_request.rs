use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateBoardRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,
}
