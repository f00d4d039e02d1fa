use crate::ListDto;
use serde::Serialize;

/// All lists on a board, in position order
#[derive(Debug, Serialize)]
pub struct ListCollectionResponse {
    pub lists: Vec<ListDto>,
}
