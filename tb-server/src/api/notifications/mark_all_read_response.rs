use serde::Serialize;

/// How many notifications were marked read
#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}
