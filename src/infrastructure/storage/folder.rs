//! Storage root backed by the configured folder

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::application::ports::{ConfigStore, StorageError, StorageHandle, StorageRoot};

/// Storage root read from the config store on every capture.
///
/// An override (from `--root` or `CLIP_STASH_ROOT`) takes precedence and is
/// never written back or cleared.
pub struct ConfiguredFolderRoot<S: ConfigStore> {
    store: S,
    override_root: Option<PathBuf>,
}

impl<S: ConfigStore> ConfiguredFolderRoot<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            override_root: None,
        }
    }

    pub fn with_override(store: S, root: Option<PathBuf>) -> Self {
        Self {
            store,
            override_root: root,
        }
    }

    async fn configured_path(&self) -> Result<PathBuf, StorageError> {
        if let Some(root) = &self.override_root {
            return Ok(root.clone());
        }

        let config = self
            .store
            .load()
            .await
            .map_err(|e| StorageError::ResolutionFailed(e.to_string()))?;

        config
            .storage_root_path()
            .ok_or(StorageError::NoRootConfigured)
    }
}

#[async_trait]
impl<S: ConfigStore> StorageRoot for ConfiguredFolderRoot<S> {
    async fn resolve(&self) -> Result<StorageHandle, StorageError> {
        let path = self.configured_path().await?;

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| StorageError::ResolutionFailed(format!("{}: {}", path.display(), e)))?;
        if !metadata.is_dir() {
            return Err(StorageError::ResolutionFailed(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let shown = path.display().to_string();
        Ok(StorageHandle::with_release(path, move || {
            debug!(root = %shown, "storage folder released");
        }))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if self.override_root.is_some() {
            debug!("storage folder comes from an override, nothing stored to clear");
            return Ok(());
        }

        self.store
            .update(|config| config.storage_root = None)
            .await
            .map_err(|e| StorageError::ClearFailed(e.to_string()))?;
        info!(path = %self.store.path().display(), "stored storage folder cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::XdgConfigStore;
    use tempfile::TempDir;

    async fn store_with_root(dir: &TempDir, root: Option<&str>) -> XdgConfigStore {
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let root = root.map(str::to_string);
        store.update(move |c| c.storage_root = root).await.unwrap();
        store
    }

    #[tokio::test]
    async fn unset_root_is_not_configured() {
        let dir = TempDir::new().unwrap();
        let root = ConfiguredFolderRoot::new(store_with_root(&dir, None).await);
        assert!(matches!(root.resolve().await, Err(StorageError::NoRootConfigured)));
    }

    #[tokio::test]
    async fn blank_root_is_not_configured() {
        let dir = TempDir::new().unwrap();
        let root = ConfiguredFolderRoot::new(store_with_root(&dir, Some("  ")).await);
        assert!(matches!(root.resolve().await, Err(StorageError::NoRootConfigured)));
    }

    #[tokio::test]
    async fn existing_directory_resolves() {
        let dir = TempDir::new().unwrap();
        let stash = dir.path().join("stash");
        std::fs::create_dir(&stash).unwrap();
        let root =
            ConfiguredFolderRoot::new(store_with_root(&dir, stash.to_str()).await);

        let handle = root.resolve().await.unwrap();
        assert_eq!(handle.path(), stash.as_path());
        handle.release();
    }

    #[tokio::test]
    async fn missing_directory_fails_resolution() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("gone");
        let root = ConfiguredFolderRoot::new(store_with_root(&dir, gone.to_str()).await);
        assert!(matches!(root.resolve().await, Err(StorageError::ResolutionFailed(_))));
    }

    #[tokio::test]
    async fn file_is_not_a_root() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let root = ConfiguredFolderRoot::new(store_with_root(&dir, file.to_str()).await);
        match root.resolve().await {
            Err(StorageError::ResolutionFailed(reason)) => assert!(reason.contains("not a directory")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn clear_forgets_stored_root() {
        let dir = TempDir::new().unwrap();
        let store = store_with_root(&dir, Some("/nowhere")).await;
        let root = ConfiguredFolderRoot::new(store);

        root.clear().await.unwrap();
        assert!(matches!(root.resolve().await, Err(StorageError::NoRootConfigured)));
    }

    #[tokio::test]
    async fn override_wins_and_is_never_cleared() {
        let dir = TempDir::new().unwrap();
        let store = store_with_root(&dir, Some("/configured")).await;
        let root = ConfiguredFolderRoot::with_override(store, Some(dir.path().to_path_buf()));

        assert_eq!(root.resolve().await.unwrap().path(), dir.path());
        root.clear().await.unwrap();

        let reloaded = XdgConfigStore::with_path(dir.path().join("config.toml"));
        assert_eq!(
            reloaded.load().await.unwrap().storage_root.as_deref(),
            Some("/configured")
        );
    }
}
