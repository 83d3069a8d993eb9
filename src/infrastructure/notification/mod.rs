//! Notification infrastructure module
//!
//! Provides cross-platform notification support using notify-rust.

mod notify_rust;

pub use notify_rust::{NotifyRustNotifier, SilentNotifier, APP_NAME};

use crate::application::ports::Notifier;

/// Create the notifier for the current settings
pub fn create_notifier(enabled: bool) -> Box<dyn Notifier> {
    if enabled {
        Box::new(NotifyRustNotifier::new())
    } else {
        Box::new(SilentNotifier)
    }
}
