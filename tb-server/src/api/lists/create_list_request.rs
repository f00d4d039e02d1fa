use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateListRequest {
    /// List title (required)
    pub title: String,

    /// Position on the board; appended at the end when omitted
    #[serde(default)]
    pub position: Option<i32>,
}
