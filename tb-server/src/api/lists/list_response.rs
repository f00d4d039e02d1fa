use crate::ListDto;
use serde::Serialize;

/// Single list response
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub list: ListDto,
}
