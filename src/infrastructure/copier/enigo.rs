//! Cross-platform selection copier using enigo
//!
//! Sends the platform copy chord (Cmd+C on macOS, Ctrl+C elsewhere) to the
//! focused application.

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{CopyError, SelectionCopier};

/// Modifier half of the copy chord
#[cfg(target_os = "macos")]
const COPY_MODIFIER: enigo::Key = enigo::Key::Meta;
#[cfg(not(target_os = "macos"))]
const COPY_MODIFIER: enigo::Key = enigo::Key::Control;

/// Selection copier that simulates the copy shortcut with enigo
pub struct EnigoCopier;

impl EnigoCopier {
    /// Create a new enigo copier
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnigoCopier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SelectionCopier for EnigoCopier {
    async fn copy_selection(&self) -> Result<(), CopyError> {
        // enigo operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            use enigo::{Direction, Enigo, Key, Keyboard, Settings};

            let mut enigo = Enigo::new(&Settings::default())
                .map_err(|e| CopyError::Failed(format!("Failed to create enigo: {}", e)))?;

            let chord = |enigo: &mut Enigo| -> Result<(), enigo::InputError> {
                enigo.key(COPY_MODIFIER, Direction::Press)?;
                enigo.key(Key::Unicode('c'), Direction::Click)?;
                enigo.key(COPY_MODIFIER, Direction::Release)
            };

            let sent = chord(&mut enigo);
            if sent.is_err() {
                // never leave the modifier held down
                let _ = enigo.key(COPY_MODIFIER, Direction::Release);
            }
            sent.map_err(|e| CopyError::Failed(format!("Failed to send copy shortcut: {}", e)))?;

            debug!("copy shortcut sent");
            Ok(())
        })
        .await
        .map_err(|e| CopyError::Failed(format!("Task join error: {}", e)))?
    }
}
