//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::CaptureResult;

/// Title used for capture notifications
pub const CAPTURE_TITLE: &str = "Saved to your second brain!";

/// Notification errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to show notification: {0}")]
    SendFailed(String),
}

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationIcon {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
        }
    }
}

/// A desktop notification ready to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub icon: NotificationIcon,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>, icon: NotificationIcon) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            icon,
        }
    }

    /// "`<kind>: <name> was logged and stored.`"
    pub fn for_capture(result: &CaptureResult) -> Self {
        Self::new(
            CAPTURE_TITLE,
            format!(
                "{}: {} was logged and stored.",
                result.kind.label(),
                result.display_name()
            ),
            NotificationIcon::Success,
        )
    }
}

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.as_ref().notify(notification).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capture::{CaptureTrigger, ContentKind};

    fn saved(kind: ContentKind, filename: &str, preview: Option<&str>) -> CaptureResult {
        CaptureResult {
            success: true,
            kind,
            trigger: CaptureTrigger::ManualShortcut,
            filename: filename.to_string(),
            text_preview: preview.map(str::to_string),
            saved: Vec::new(),
            failed: 0,
        }
    }

    #[test]
    fn text_capture_uses_preview() {
        let result = saved(
            ContentKind::PlainText,
            "text_2024-01-01_00-00-00.txt",
            Some("The quick brown fox jumps..."),
        );
        let n = Notification::for_capture(&result);
        assert_eq!(n.title, CAPTURE_TITLE);
        assert_eq!(n.body, "Text: The quick brown fox jumps... was logged and stored.");
        assert_eq!(n.icon, NotificationIcon::Success);
    }

    #[test]
    fn file_capture_uses_filename() {
        let result = saved(ContentKind::Pdf, "document_2024-01-01_00-00-00.pdf", None);
        let n = Notification::for_capture(&result);
        assert_eq!(n.body, "PDF: document_2024-01-01_00-00-00.pdf was logged and stored.");
    }

    #[test]
    fn batch_capture_body() {
        let result = saved(ContentKind::MultipleFiles { count: 3 }, "Multiple files", None);
        let n = Notification::for_capture(&result);
        assert_eq!(n.body, "3 Files: Multiple files was logged and stored.");
    }
}
