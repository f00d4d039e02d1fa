use crate::BoardDto;
use serde::Serialize;

/// Single board response
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub board: BoardDto,
}
