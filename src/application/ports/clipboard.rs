//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::{ClipboardPayload, ClipboardSnapshot};

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for the shared system clipboard
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read every representation currently on the clipboard.
    async fn read(&self) -> Result<ClipboardPayload, ClipboardError>;

    /// Monotonic counter that changes whenever the clipboard content changes.
    ///
    /// Only equality between two readings is meaningful.
    async fn change_count(&self) -> Result<u64, ClipboardError>;

    /// Take a verbatim copy of the clipboard for later restoration.
    async fn snapshot(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.read().await.map(ClipboardSnapshot::from)
    }

    /// Replace the clipboard with a previously taken snapshot.
    async fn restore(&self, snapshot: ClipboardSnapshot) -> Result<(), ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl Clipboard for Box<dyn Clipboard> {
    async fn read(&self) -> Result<ClipboardPayload, ClipboardError> {
        self.as_ref().read().await
    }

    async fn change_count(&self) -> Result<u64, ClipboardError> {
        self.as_ref().change_count().await
    }

    async fn snapshot(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        self.as_ref().snapshot().await
    }

    async fn restore(&self, snapshot: ClipboardSnapshot) -> Result<(), ClipboardError> {
        self.as_ref().restore(snapshot).await
    }
}
