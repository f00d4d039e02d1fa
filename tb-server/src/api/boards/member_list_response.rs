use crate::MemberDto;
use serde::Serialize;

/// List of board members response
#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MemberDto>,
}
