use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::error::{AppError, Result};
use crate::infrastructure::spreadsheet::decode_text;

/// A file handed to the importer by an upload handler
#[async_trait]
pub trait UploadedFile: Send + Sync {
    /// Original file name, extension included
    fn name(&self) -> &str;

    /// Full binary content
    async fn bytes(&self) -> Result<Vec<u8>>;

    /// Full textual content
    async fn text(&self) -> Result<String> {
        let bytes = self.bytes().await?;
        Ok(decode_text(&bytes))
    }
}

/// Upload already held in memory, e.g. a multipart form part
#[derive(Debug, Clone)]
pub struct MemoryUpload {
    name: String,
    content: Vec<u8>,
}

impl MemoryUpload {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[async_trait]
impl UploadedFile for MemoryUpload {
    fn name(&self) -> &str {
        &self.name
    }

    async fn bytes(&self) -> Result<Vec<u8>> {
        Ok(self.content.clone())
    }
}

/// Upload stored on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalUpload {
    path: PathBuf,
    name: String,
}

impl LocalUpload {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UploadedFile for LocalUpload {
    fn name(&self) -> &str {
        &self.name
    }

    async fn bytes(&self) -> Result<Vec<u8>> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })
    }
}
