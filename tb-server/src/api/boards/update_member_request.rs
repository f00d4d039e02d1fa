use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    /// One of "admin", "member", "viewer"
    pub role: String,
}
