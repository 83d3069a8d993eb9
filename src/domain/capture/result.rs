//! Capture result value object

use std::path::PathBuf;

use serde::Serialize;

use super::kind::ContentKind;
use super::trigger::CaptureTrigger;

/// Number of words kept in a plain-text preview
pub const PREVIEW_WORDS: usize = 5;

/// Preview shown when the text has no words
pub const PREVIEW_FALLBACK: &str = "Text snippet";

/// Filename reported for a multi-file batch
pub const MULTIPLE_FILES_NAME: &str = "Multiple files";

/// Outcome of one capture call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureResult {
    /// At least one item was persisted
    pub success: bool,
    /// Kind chosen by the sniffer
    pub kind: ContentKind,
    /// Trigger that started the capture
    pub trigger: CaptureTrigger,
    /// Destination filename, or "Multiple files" for a batch
    pub filename: String,
    /// First words of the text, plain text only
    pub text_preview: Option<String>,
    /// Every path written
    pub saved: Vec<PathBuf>,
    /// Items that failed to persist
    pub failed: usize,
}

impl CaptureResult {
    /// Result for a payload nothing could classify
    pub fn unrecognized(trigger: CaptureTrigger) -> Self {
        Self {
            success: false,
            kind: ContentKind::Unrecognized,
            trigger,
            filename: String::new(),
            text_preview: None,
            saved: Vec::new(),
            failed: 0,
        }
    }

    /// Name shown to the user: the text preview when present, else the filename
    pub fn display_name(&self) -> &str {
        self.text_preview.as_deref().unwrap_or(&self.filename)
    }
}

/// First five whitespace-delimited words joined by single spaces, with
/// "..." appended when words were cut off. Blank text yields
/// "Text snippet".
pub fn text_preview(text: &str) -> String {
    let mut words = text.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(PREVIEW_WORDS).collect();

    if head.is_empty() {
        return PREVIEW_FALLBACK.to_string();
    }

    let mut preview = head.join(" ");
    if words.next().is_some() {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_after_five_words() {
        assert_eq!(
            text_preview("The quick brown fox jumps over the lazy dog"),
            "The quick brown fox jumps..."
        );
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        assert_eq!(text_preview("hello world"), "hello world");
        assert_eq!(text_preview("one two three four five"), "one two three four five");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(text_preview("  a\n\tb   c  "), "a b c");
    }

    #[test]
    fn preview_falls_back_on_blank() {
        assert_eq!(text_preview(""), "Text snippet");
        assert_eq!(text_preview("   \n\t "), "Text snippet");
    }

    #[test]
    fn unrecognized_result() {
        let result = CaptureResult::unrecognized(CaptureTrigger::AutoPoll);
        assert!(!result.success);
        assert_eq!(result.kind, ContentKind::Unrecognized);
        assert!(result.saved.is_empty());
    }

    #[test]
    fn display_name_prefers_preview() {
        let mut result = CaptureResult::unrecognized(CaptureTrigger::Drop);
        result.filename = "text_x.txt".to_string();
        assert_eq!(result.display_name(), "text_x.txt");
        result.text_preview = Some("hello".to_string());
        assert_eq!(result.display_name(), "hello");
    }
}
