use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::MediaPath;

/// Scratch storage for one request's upload and waveform.
#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    async fn store(
        &self,
        path: &MediaPath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, MediaStoreError>;

    async fn fetch(&self, path: &MediaPath) -> Result<Vec<u8>, MediaStoreError>;

    /// Removes the file and, once empty, its per-upload directory.
    async fn delete(&self, path: &MediaPath) -> Result<(), MediaStoreError>;

    /// Filesystem location of `path`, for collaborators that work on files.
    fn resolve(&self, path: &MediaPath) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum MediaStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
