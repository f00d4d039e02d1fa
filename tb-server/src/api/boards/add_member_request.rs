use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    /// The user to add (required)
    pub user_id: String,

    /// One of "admin", "member", "viewer"; defaults to "member"
    #[serde(default)]
    pub role: Option<String>,
}
