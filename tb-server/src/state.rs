use crate::services::files::FileStore;

use tb_auth::{JwtValidator, TokenIssuer};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<JwtValidator>,
    pub files: Arc<FileStore>,
    /// Deployment label surfaced by the health endpoint
    pub environment: String,
}
