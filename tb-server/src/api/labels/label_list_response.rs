use crate::LabelDto;
use serde::Serialize;

/// List of labels response
#[derive(Debug, Serialize)]
pub struct LabelListResponse {
    pub labels: Vec<LabelDto>,
}
