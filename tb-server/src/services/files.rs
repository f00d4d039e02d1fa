//! Upload storage.
//!
//! Files land under `{base}/{user_id}/{purpose}/`; every resolved path is
//! checked to stay inside the base directory before any filesystem call.

use crate::{ApiError, ApiResult};

use tb_config::StorageConfig;

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilePurpose {
    ProfilePhoto,
    TaskAttachment,
}

impl FilePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProfilePhoto => "profile",
            Self::TaskAttachment => "attachments",
        }
    }
}

/// A stored upload: the path is relative to the storage base and is what
/// gets persisted in the database.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub relative_path: String,
    pub size: u64,
}

pub struct FileStore {
    base: PathBuf,
    max_file_size: u64,
    allowed_extensions: Vec<String>,
}

impl FileStore {
    pub fn new(base: PathBuf, config: &StorageConfig) -> Self {
        Self {
            base,
            max_file_size: config.max_file_size_bytes,
            allowed_extensions: config.allowed_extensions.clone(),
        }
    }

    /// Write an upload to disk under the user's subtree.
    pub async fn store(
        &self,
        user_id: Uuid,
        purpose: FilePurpose,
        file_name: &str,
        bytes: &[u8],
    ) -> ApiResult<StoredFile> {
        if bytes.is_empty() {
            return Err(ApiError::validation("Uploaded file is empty"));
        }
        if bytes.len() as u64 > self.max_file_size {
            return Err(ApiError::validation(format!(
                "File exceeds the maximum size of {} bytes",
                self.max_file_size
            )));
        }

        let sanitized = sanitize_file_name(file_name)?;
        self.check_extension(&sanitized)?;

        // Random prefix keeps same-named uploads from colliding
        let unique = format!("{}_{}", Uuid::new_v4().simple(), sanitized);
        let relative_path = format!("{}/{}/{}", user_id, purpose.as_str(), unique);

        let full_path = self.resolve(&relative_path)?;
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::internal(format!("Failed to create upload dir: {e}")))?;
        }

        tokio::fs::write(&full_path, bytes)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to write upload: {e}")))?;

        log::debug!("Stored upload {} ({} bytes)", relative_path, bytes.len());

        Ok(StoredFile {
            relative_path,
            size: bytes.len() as u64,
        })
    }

    /// Delete a previously stored file. Missing files are not an error;
    /// the metadata row is the source of truth.
    pub async fn remove(&self, relative_path: &str) -> ApiResult<()> {
        let full_path = self.resolve(relative_path)?;

        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::internal(format!("Failed to remove upload: {e}"))),
        }
    }

    /// Join a relative path onto the base, rejecting anything that could
    /// escape it.
    pub fn resolve(&self, relative_path: &str) -> ApiResult<PathBuf> {
        let relative = Path::new(relative_path);

        if relative.is_absolute() {
            return Err(ApiError::validation("File path must be relative"));
        }
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                _ => {
                    return Err(ApiError::validation(
                        "File path must not contain '..' or other special components",
                    ));
                }
            }
        }

        let full_path = self.base.join(relative);
        if !full_path.starts_with(&self.base) {
            return Err(ApiError::validation("File path escapes the storage root"));
        }

        Ok(full_path)
    }

    fn check_extension(&self, file_name: &str) -> ApiResult<()> {
        // An empty allowlist accepts anything
        if self.allowed_extensions.is_empty() {
            return Ok(());
        }

        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ApiError::validation("File has no extension"))?;

        if !self.allowed_extensions.iter().any(|a| *a == extension) {
            return Err(ApiError::validation(format!(
                "File extension '{}' is not allowed",
                extension
            )));
        }

        Ok(())
    }
}

/// Strip a client-supplied file name down to a safe basename.
fn sanitize_file_name(file_name: &str) -> ApiResult<String> {
    // Drop any path the client sent along
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.' || c == '_') {
        return Err(ApiError::validation("Invalid file name"));
    }

    Ok(sanitized)
}
