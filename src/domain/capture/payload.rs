//! Clipboard payload value objects

use std::fmt;
use std::path::PathBuf;

/// Format tag attached to a single clipboard representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatTag {
    /// PDF document bytes
    Pdf,
    /// High-fidelity bitmap (TIFF)
    Tiff,
    /// Compressed image (PNG or any other encoded raster)
    Png,
    /// Reference to a file on disk; one entry per file
    FileUrl,
    /// Rich Text Format bytes
    Rtf,
    /// HTML markup
    Html,
    /// Plain UTF-8 text
    Text,
    /// Any representation the sniffer does not understand
    Other(String),
}

impl FormatTag {
    /// MIME-style identifier for this format
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Tiff => "image/tiff",
            Self::Png => "image/png",
            Self::FileUrl => "text/uri-list",
            Self::Rtf => "text/rtf",
            Self::Html => "text/html",
            Self::Text => "text/plain",
            Self::Other(name) => name,
        }
    }

    /// Map a MIME-style identifier back to a tag
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            "image/tiff" => Self::Tiff,
            "image/png" => Self::Png,
            "text/uri-list" => Self::FileUrl,
            "text/rtf" => Self::Rtf,
            "text/html" => Self::Html,
            "text/plain" => Self::Text,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (format tag, raw bytes) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEntry {
    pub tag: FormatTag,
    pub data: Vec<u8>,
}

impl PayloadEntry {
    pub fn new(tag: FormatTag, data: impl Into<Vec<u8>>) -> Self {
        Self {
            tag,
            data: data.into(),
        }
    }

    pub fn text(tag: FormatTag, text: impl Into<String>) -> Self {
        Self::new(tag, text.into().into_bytes())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        Self::new(
            FormatTag::FileUrl,
            path.to_string_lossy().into_owned().into_bytes(),
        )
    }

    /// Interpret the bytes as UTF-8 text
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

/// Everything held by the clipboard, or carried by a single drop event.
///
/// Entries keep their insertion order. Formats are never merged: each
/// entry is an independent input to classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    entries: Vec<PayloadEntry>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<PayloadEntry>) -> Self {
        Self { entries }
    }

    /// Payload holding a single plain-text entry
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::from_entries(vec![PayloadEntry::text(FormatTag::Text, text)])
    }

    /// Payload holding one file reference per path
    pub fn from_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::from_entries(paths.into_iter().map(PayloadEntry::file).collect())
    }

    /// Append an entry (builder style)
    pub fn with(mut self, entry: PayloadEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn push(&mut self, entry: PayloadEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[PayloadEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn has(&self, tag: &FormatTag) -> bool {
        self.entries.iter().any(|e| &e.tag == tag)
    }

    /// First entry carrying the given tag
    pub fn first(&self, tag: &FormatTag) -> Option<&PayloadEntry> {
        self.entries.iter().find(|e| &e.tag == tag)
    }

    pub fn data(&self, tag: &FormatTag) -> Option<&[u8]> {
        self.first(tag).map(|e| e.data.as_slice())
    }

    pub fn text(&self, tag: &FormatTag) -> Option<&str> {
        self.first(tag).and_then(PayloadEntry::as_text)
    }

    /// All file references, in payload order. Empty references are skipped.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter(|e| e.tag == FormatTag::FileUrl)
            .filter_map(PayloadEntry::as_text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| PathBuf::from(s.strip_prefix("file://").unwrap_or(s)))
            .collect()
    }
}

/// Verbatim copy of the clipboard taken before a manual capture, used to
/// put the user's clipboard back afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardSnapshot {
    entries: Vec<PayloadEntry>,
}

impl ClipboardSnapshot {
    pub fn new(entries: Vec<PayloadEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PayloadEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<PayloadEntry> {
        self.entries
    }
}

impl From<ClipboardPayload> for ClipboardSnapshot {
    fn from(payload: ClipboardPayload) -> Self {
        Self::new(payload.entries)
    }
}
