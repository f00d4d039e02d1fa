use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLabelRequest {
    /// Label name (required)
    pub name: String,

    /// Display color, e.g. "#ff6600"
    pub color: String,
}
