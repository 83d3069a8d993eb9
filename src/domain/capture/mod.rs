//! Capture domain module

mod kind;
mod payload;
mod plan;
mod result;
mod timestamp;
mod trigger;

pub use kind::{Category, ContentKind};
pub use payload::{ClipboardPayload, ClipboardSnapshot, FormatTag, PayloadEntry};
pub use plan::{DestinationPlan, PathPlanner};
pub use result::{text_preview, CaptureResult, MULTIPLE_FILES_NAME, PREVIEW_FALLBACK, PREVIEW_WORDS};
pub use timestamp::CaptureTime;
pub use trigger::CaptureTrigger;
