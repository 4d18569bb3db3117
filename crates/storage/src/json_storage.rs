//! JSON file storage implementation.
//!
//! Stores each key as `<key>.json` in a data directory. Writes go to a
//! temporary sibling first and are renamed into place, so a crash never
//! leaves a half-written collection behind.

use std::path::{Path, PathBuf};

use super::{Result, Storage, StorageError};
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Directory holding the data files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StorageError::Other(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path(key)?).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, &path).await?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_load_remove() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load("habits").await.unwrap().is_none());

        storage.save("habits", b"[]").await.unwrap();
        assert_eq!(storage.load("habits").await.unwrap(), Some(b"[]".to_vec()));
        assert!(dir.path().join("habits.json").exists());
        assert!(!dir.path().join("habits.json.tmp").exists());

        storage.save("habits", b"[1]").await.unwrap();
        assert_eq!(storage.load("habits").await.unwrap(), Some(b"[1]".to_vec()));

        storage.remove("habits").await.unwrap();
        assert!(storage.load("habits").await.unwrap().is_none());
        storage.remove("habits").await.unwrap();
    }

    #[tokio::test]
    async fn test_creates_nested_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a").join("b");
        let storage = JsonStorage::new(&root).await.unwrap();
        storage.save("goals", b"[]").await.unwrap();
        assert!(root.join("goals.json").exists());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        assert!(matches!(
            storage.save("../escape", b"x").await,
            Err(StorageError::Other(_))
        ));
        assert!(storage.load("").await.is_err());
    }
}
