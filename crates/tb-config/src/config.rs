use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, CorsConfig, DatabaseConfig, LoggingConfig,
    ServerConfig, StorageConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for TB_CONFIG_DIR env var, else use ./.tb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply TB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: TB_CONFIG_DIR env var > ./.tb/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("TB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".tb"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.storage.validate()?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the upload root.
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.base_path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        info!("  database: {}", self.database.path);

        info!(
            "  auth: HS256, token lifetime {}m",
            self.auth.token_lifetime_minutes
        );

        info!(
            "  storage: {} (max {} bytes, {} extensions)",
            self.storage.base_path,
            self.storage.max_file_size_bytes,
            self.storage.allowed_extensions.len()
        );

        if self.cors.allowed_origins.is_empty() {
            info!("  cors: any origin");
        } else {
            info!("  cors: {} origins", self.cors.allowed_origins.len());
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("TB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("TB_SERVER_PORT", &mut self.server.port);
        Self::apply_env_string("TB_SERVER_ENVIRONMENT", &mut self.server.environment);

        // Database
        Self::apply_env_string("TB_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("TB_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_option_string("TB_AUTH_ISSUER", &mut self.auth.issuer);
        Self::apply_env_option_string("TB_AUTH_AUDIENCE", &mut self.auth.audience);
        Self::apply_env_parse(
            "TB_AUTH_TOKEN_LIFETIME_MINUTES",
            &mut self.auth.token_lifetime_minutes,
        );

        // Storage
        Self::apply_env_string("TB_STORAGE_BASE_PATH", &mut self.storage.base_path);
        Self::apply_env_parse(
            "TB_STORAGE_MAX_FILE_SIZE_BYTES",
            &mut self.storage.max_file_size_bytes,
        );

        // Logging
        Self::apply_env_parse("TB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("TB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("TB_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
