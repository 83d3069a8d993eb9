//! Clipboard infrastructure module
//!
//! Provides multi-format system clipboard access using clipboard-rs.

mod native;

pub use native::NativeClipboard;
