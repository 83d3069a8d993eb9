//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod capture;
pub mod config;
pub mod error;
pub mod schedule;

// Re-export common types
pub use capture::{
    CaptureResult, CaptureTime, CaptureTrigger, Category, ClipboardPayload, ClipboardSnapshot,
    ContentKind, DestinationPlan, FormatTag, PathPlanner, PayloadEntry,
};
pub use config::AppConfig;
pub use error::*;
pub use schedule::Interval;
