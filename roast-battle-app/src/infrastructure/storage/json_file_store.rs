use super::KvStore;
use async_trait::async_trait;
use roast_battle_errors::AppError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Keeps every entry in one JSON object on disk. A missing file reads as an
/// empty store; each write replaces the whole file through a rename.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::Storage(format!(
                "reading {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(entries)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await.map_err(|e| {
            AppError::Storage(format!("writing {}: {}", staging.display(), e))
        })?;
        tokio::fs::rename(&staging, &self.path).await.map_err(|e| {
            AppError::Storage(format!("replacing {}: {}", self.path.display(), e))
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl KvStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries).await?;
        tracing::debug!("Stored {} in {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        if entries.remove(key).is_some() {
            self.write_all(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("anything").await.unwrap(), None);
        store.remove("anything").await.unwrap();
    }

    #[tokio::test]
    async fn test_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");

        let store = JsonFileStore::new(&path);
        store.set("a", "1".to_string()).await.unwrap();
        store.set("b", "2".to_string()).await.unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a").await.unwrap().as_deref(), Some("1"));

        reopened.remove("a").await.unwrap();
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_never_see_half_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        let store = Arc::new(JsonFileStore::new(&path));
        store.set("user", "x".repeat(4096)).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    store.set("user", i.to_string().repeat(4096)).await.map(|_| ())
                } else {
                    store.get("user").await.map(|_| ())
                }
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert!(store.get("user").await.unwrap().is_some());
        assert!(!dir.path().join("cache.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("a").await,
            Err(AppError::Serialization(_))
        ));
    }
}
