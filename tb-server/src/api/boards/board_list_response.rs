use crate::BoardDto;
use serde::Serialize;

/// List of boards response
#[derive(Debug, Serialize)]
pub struct BoardListResponse {
    pub boards: Vec<BoardDto>,
}
