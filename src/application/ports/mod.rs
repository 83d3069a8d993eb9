//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod copier;
pub mod notifier;
pub mod storage;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use copier::{CopyError, SelectionCopier};
pub use notifier::{Notification, NotificationError, NotificationIcon, Notifier};
pub use storage::{StorageError, StorageHandle, StorageRoot};
