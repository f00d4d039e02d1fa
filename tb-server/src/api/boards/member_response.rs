use crate::MemberDto;
use serde::Serialize;

/// Single board member response
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member: MemberDto,
}
