//! No-op selection copier

use async_trait::async_trait;

use crate::application::ports::{CopyError, SelectionCopier};

/// Copier that leaves the clipboard as it is.
///
/// Used when saving whatever the clipboard already holds.
pub struct NoOpCopier;

impl NoOpCopier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCopier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionCopier for NoOpCopier {
    async fn copy_selection(&self) -> Result<(), CopyError> {
        Ok(())
    }
}
