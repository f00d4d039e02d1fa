use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] tb_config::ConfigError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] tb_auth::AuthError),

    #[error("Database error: {0}")]
    Db(#[from] tb_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    // main() bubbles startup failures up through these conversions
    #[test]
    fn startup_error_sources_convert_and_render() {
        let config: ServerError = tb_config::ConfigError::config("bad value").into();
        assert!(config.to_string().starts_with("Config error:"));

        let io: ServerError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(io.to_string().starts_with("IO error:"));

        let db: ServerError = tb_db::DbError::from(sqlx::Error::PoolClosed).into();
        assert!(db.to_string().starts_with("Database error:"));

        let auth: ServerError = tb_auth::AuthError::WeakSigningKey {
            bytes: 8,
            min: 32,
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        }
        .into();
        assert!(auth.to_string().starts_with("Auth setup error:"));
    }
}
