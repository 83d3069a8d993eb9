//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod capture;
pub mod monitor;
pub mod ports;
pub mod sniffer;

// Re-export use cases
pub use capture::{CaptureError, CaptureOptions, ClipboardCaptureService, PersistError};
pub use monitor::{CaptureOutcome, ClipboardMonitor};
pub use sniffer::{ContentSniffer, Sniffed, SniffedContent};
