//! Upload persistence
//!
//! Uploaded documents are written under a unique name inside the configured
//! uploads directory and removed again once analysis finishes. `TempUpload`
//! deletes the file when dropped, so cleanup happens on error paths too.

use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Upper bound for uploaded documents. Axum caps request bodies at 2 MB by
/// default, which real legal PDFs routinely exceed.
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub struct UploadConfig {
    dir: PathBuf,
}

impl UploadConfig {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// A persisted upload that removes itself on drop.
pub struct TempUpload {
    path: PathBuf,
}

impl TempUpload {
    /// Write the bytes under `<dir>/<uuid>-<name>`.
    pub async fn write(dir: &Path, name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        let path = dir.join(format!("{}-{}", Uuid::new_v4(), name));
        tokio::fs::write(&path, bytes).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            tracing::warn!("Failed to remove upload {}: {}", self.path.display(), err);
        }
    }
}

/// Strip directory components and replace unsafe characters, keeping the
/// extension intact.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');

    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
