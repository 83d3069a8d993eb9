//! Storage root port interface

use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Storage root errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("No storage folder configured. Run 'clip-stash config set storage_root <dir>'")]
    NoRootConfigured,

    #[error("Storage folder could not be resolved: {0}")]
    ResolutionFailed(String),

    #[error("Failed to clear stored folder: {0}")]
    ClearFailed(String),
}

type ReleaseHook = Box<dyn FnOnce() + Send>;

/// Access to a resolved storage directory, held for one capture.
///
/// The release hook runs exactly once: on [`StorageHandle::release`] or,
/// failing that, when the handle is dropped.
pub struct StorageHandle {
    path: PathBuf,
    on_release: Option<ReleaseHook>,
}

impl StorageHandle {
    /// Handle with nothing to release
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            on_release: None,
        }
    }

    /// Handle that runs `on_release` when access ends
    pub fn with_release(path: impl Into<PathBuf>, on_release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            path: path.into(),
            on_release: Some(Box::new(on_release)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End access to the directory
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(hook) = self.on_release.take() {
            hook();
        }
    }
}

impl Drop for StorageHandle {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for StorageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageHandle")
            .field("path", &self.path)
            .field("released", &self.on_release.is_none())
            .finish()
    }
}

/// Port for the user-chosen storage folder
#[async_trait]
pub trait StorageRoot: Send + Sync {
    /// Resolve the folder and acquire access to it for one capture.
    /// Never cached: the grant may have been revoked since the last call.
    async fn resolve(&self) -> Result<StorageHandle, StorageError>;

    /// Forget the stored folder after it failed to resolve.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Blanket implementation for boxed storage roots
#[async_trait]
impl StorageRoot for Box<dyn StorageRoot> {
    async fn resolve(&self) -> Result<StorageHandle, StorageError> {
        self.as_ref().resolve().await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.as_ref().clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_handle() -> (StorageHandle, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let hook_count = Arc::clone(&count);
        let handle = StorageHandle::with_release("/stash", move || {
            hook_count.fetch_add(1, Ordering::SeqCst);
        });
        (handle, count)
    }

    #[test]
    fn release_runs_hook_once() {
        let (handle, count) = counting_handle();
        assert_eq!(handle.path(), Path::new("/stash"));
        handle.release();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_runs_hook() {
        let (handle, count) = counting_handle();
        drop(handle);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn plain_handle_has_nothing_to_release() {
        let handle = StorageHandle::new("/stash");
        assert!(format!("{:?}", handle).contains("released: true"));
        handle.release();
    }
}
