use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{MediaStore, MediaStoreError};
use crate::domain::MediaPath;

/// Scratch files kept on the local filesystem under a fixed root.
pub struct LocalMediaStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalMediaStore {
    pub fn new(base_path: PathBuf) -> Result<Self, MediaStoreError> {
        std::fs::create_dir_all(&base_path).map_err(MediaStoreError::Io)?;
        let base_path = base_path.canonicalize().map_err(MediaStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(
        &self,
        path: &MediaPath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, MediaStoreError> {
        let store_path = StorePath::from(path.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(MediaStoreError::Io(e));
                }
            };
            if bytes.is_empty() {
                continue;
            }
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(MediaStoreError::WriteFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| MediaStoreError::WriteFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn fetch(&self, path: &MediaPath) -> Result<Vec<u8>, MediaStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self
            .inner
            .get(&store_path)
            .await
            .map_err(|e| match e {
                object_store::Error::NotFound { .. } => MediaStoreError::NotFound(e.to_string()),
                other => MediaStoreError::ReadFailed(other.to_string()),
            })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| MediaStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, path: &MediaPath) -> Result<(), MediaStoreError> {
        let store_path = StorePath::from(path.as_str());
        let result = self.inner.delete(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => MediaStoreError::NotFound(e.to_string()),
            other => MediaStoreError::DeleteFailed(other.to_string()),
        });

        // Fails while siblings remain, which is expected.
        if let Some(dir) = path.directory() {
            let _ = tokio::fs::remove_dir(self.base_path.join(dir)).await;
        }

        result
    }

    fn resolve(&self, path: &MediaPath) -> PathBuf {
        self.base_path.join(path.as_str())
    }
}
