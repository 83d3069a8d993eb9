//! Capture trigger value object

use std::fmt;

use serde::Serialize;

/// What caused a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureTrigger {
    /// User shortcut: the selection is copied onto the clipboard first
    ManualShortcut,
    /// Periodic poll noticed a clipboard change
    AutoPoll,
    /// Files, text, or an image dropped onto the app
    Drop,
}

impl CaptureTrigger {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManualShortcut => "manual",
            Self::AutoPoll => "auto-poll",
            Self::Drop => "drop",
        }
    }

    /// Whether the clipboard is snapshotted before capture.
    ///
    /// AutoPoll saves the live clipboard itself and Drop never touches it,
    /// so only a manual capture has anything to put back.
    pub const fn takes_snapshot(&self) -> bool {
        matches!(self, Self::ManualShortcut)
    }

    /// Whether the pre-capture clipboard is restored afterwards
    pub const fn restores_clipboard(&self) -> bool {
        matches!(self, Self::ManualShortcut)
    }

    /// Whether the payload comes from the system clipboard when none is supplied
    pub const fn reads_clipboard(&self) -> bool {
        !matches!(self, Self::Drop)
    }
}

impl fmt::Display for CaptureTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_poll_never_snapshots_or_restores() {
        assert!(!CaptureTrigger::AutoPoll.takes_snapshot());
        assert!(!CaptureTrigger::AutoPoll.restores_clipboard());
        assert!(CaptureTrigger::AutoPoll.reads_clipboard());
    }

    #[test]
    fn drop_leaves_clipboard_alone() {
        assert!(!CaptureTrigger::Drop.restores_clipboard());
        assert!(!CaptureTrigger::Drop.reads_clipboard());
    }

    #[test]
    fn manual_shortcut_restores() {
        assert!(CaptureTrigger::ManualShortcut.takes_snapshot());
        assert!(CaptureTrigger::ManualShortcut.restores_clipboard());
    }

    #[test]
    fn display() {
        assert_eq!(CaptureTrigger::AutoPoll.to_string(), "auto-poll");
    }
}
