use crate::LabelDto;
use serde::Serialize;

/// Single label response
#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub label: LabelDto,
}
