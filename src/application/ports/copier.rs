//! Selection copier port interface

use async_trait::async_trait;
use thiserror::Error;

/// Selection copy errors
#[derive(Debug, Clone, Error)]
pub enum CopyError {
    #[error("Failed to copy selection: {0}")]
    Failed(String),
}

/// Port for pulling the current selection onto the clipboard
#[async_trait]
pub trait SelectionCopier: Send + Sync {
    /// Simulate the platform copy shortcut in the focused application.
    ///
    /// The clipboard may take a moment to update after this returns.
    async fn copy_selection(&self) -> Result<(), CopyError>;
}

/// Blanket implementation for boxed copier types
#[async_trait]
impl SelectionCopier for Box<dyn SelectionCopier> {
    async fn copy_selection(&self) -> Result<(), CopyError> {
        self.as_ref().copy_selection().await
    }
}
