use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateListRequest {
    pub title: String,

    #[serde(default)]
    pub position: Option<i32>,
}
