//! Upload store seam: accepts binary content, hands back an opaque id the
//! extraction endpoint can redeem later.

pub mod handlers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::fs;
use uuid::Uuid;

/// Magic prefix every well-formed PDF starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// Opaque handle for stored content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHandle {
    pub file_id: Uuid,
    pub size: u64,
    pub stored_at: DateTime<Utc>,
}

#[async_trait]
pub trait UploadStore: Send + Sync {
    async fn put(&self, content: Bytes) -> Result<FileHandle>;
    /// `None` when no upload exists under this id.
    async fn get(&self, file_id: Uuid) -> Result<Option<Bytes>>;
}

/// Disk-backed store writing one `<uuid>.pdf` per upload.
pub struct DiskUploadStore {
    root: PathBuf,
}

impl DiskUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, file_id: Uuid) -> PathBuf {
        self.root.join(format!("{file_id}.pdf"))
    }
}

#[async_trait]
impl UploadStore for DiskUploadStore {
    async fn put(&self, content: Bytes) -> Result<FileHandle> {
        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("creating upload directory {}", self.root.display()))?;

        let file_id = Uuid::new_v4();
        let path = self.path_for(file_id);
        fs::write(&path, &content)
            .await
            .with_context(|| format!("writing upload to {}", path.display()))?;

        Ok(FileHandle {
            file_id,
            size: content.len() as u64,
            stored_at: Utc::now(),
        })
    }

    async fn get(&self, file_id: Uuid) -> Result<Option<Bytes>> {
        let path = self.path_for(file_id);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes.into())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading upload {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskUploadStore::new(dir.path());

        let handle = store.put(Bytes::from_static(b"%PDF-1.4 content")).await.unwrap();
        assert_eq!(handle.size, 16);

        let bytes = store.get(handle.file_id).await.unwrap().unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4 content");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskUploadStore::new(dir.path());
        assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskUploadStore::new(dir.path().join("nested/uploads"));
        let handle = store.put(Bytes::from_static(b"%PDF-")).await.unwrap();
        assert!(store.get(handle.file_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_ids_are_unique_per_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiskUploadStore::new(dir.path());
        let a = store.put(Bytes::from_static(b"%PDF-a")).await.unwrap();
        let b = store.put(Bytes::from_static(b"%PDF-b")).await.unwrap();
        assert_ne!(a.file_id, b.file_id);
    }
}
