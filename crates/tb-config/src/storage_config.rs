use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_FILE_SIZE_BYTES, DEFAULT_STORAGE_DIRECTORY};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Upload root, relative to the config directory
    pub base_path: String,
    pub max_file_size_bytes: u64,
    /// Lowercase extensions accepted for upload; empty allows any
    pub allowed_extensions: Vec<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_path: String::from(DEFAULT_STORAGE_DIRECTORY),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: vec![
                String::from("png"),
                String::from("jpg"),
                String::from("jpeg"),
                String::from("gif"),
                String::from("pdf"),
                String::from("txt"),
                String::from("md"),
                String::from("zip"),
            ],
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if std::path::Path::new(&self.base_path).is_absolute() || self.base_path.contains("..") {
            return Err(ConfigError::storage(
                "storage.base_path must be relative and cannot contain '..'",
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(ConfigError::storage(
                "storage.max_file_size_bytes must be greater than 0",
            ));
        }

        Ok(())
    }
}
