//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, input simulation,
//! desktop notifications and the filesystem.

pub mod clipboard;
pub mod config;
pub mod copier;
pub mod notification;
pub mod storage;

// Re-export adapters
pub use clipboard::NativeClipboard;
pub use config::XdgConfigStore;
pub use copier::{create_copier, EnigoCopier, NoOpCopier};
pub use notification::{create_notifier, NotifyRustNotifier, SilentNotifier};
pub use storage::ConfiguredFolderRoot;
