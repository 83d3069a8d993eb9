//! System clipboard adapter using clipboard-rs
//!
//! Reads every format the clipboard advertises, tagging the ones the
//! sniffer understands, and writes a snapshot back as a single
//! multi-format update.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard as _, ClipboardContent, ClipboardContext, ContentFormat};
use tracing::{debug, warn};
use url::Url;

use crate::application::ports::{Clipboard, ClipboardError};
use crate::domain::capture::{ClipboardPayload, ClipboardSnapshot, FormatTag, PayloadEntry};

/// Platform identifiers of the formats that map onto a [`FormatTag`]
#[cfg(target_os = "macos")]
mod native {
    pub const PDF: &str = "com.adobe.pdf";
    pub const TIFF: &str = "public.tiff";
    pub const PNG: &str = "public.png";
    pub const FILE_URL: &str = "public.file-url";
    pub const RTF: &str = "public.rtf";
    pub const HTML: &str = "public.html";
    pub const TEXT: &str = "public.utf8-plain-text";
}

#[cfg(not(target_os = "macos"))]
mod native {
    pub const PDF: &str = "application/pdf";
    pub const TIFF: &str = "image/tiff";
    pub const PNG: &str = "image/png";
    pub const FILE_URL: &str = "text/uri-list";
    pub const RTF: &str = "text/rtf";
    pub const HTML: &str = "text/html";
    pub const TEXT: &str = "text/plain";
}

/// X11 selection targets that describe the selection rather than hold data
const META_TARGETS: &[&str] = &["TARGETS", "TIMESTAMP", "MULTIPLE", "SAVE_TARGETS"];

fn tag_for_format(format: &str) -> FormatTag {
    match format {
        native::PDF => FormatTag::Pdf,
        native::TIFF => FormatTag::Tiff,
        native::PNG => FormatTag::Png,
        native::FILE_URL => FormatTag::FileUrl,
        native::RTF => FormatTag::Rtf,
        native::HTML => FormatTag::Html,
        native::TEXT => FormatTag::Text,
        other => FormatTag::Other(other.to_string()),
    }
}

fn native_format(tag: &FormatTag) -> &str {
    match tag {
        FormatTag::Pdf => native::PDF,
        FormatTag::Tiff => native::TIFF,
        FormatTag::Png => native::PNG,
        FormatTag::FileUrl => native::FILE_URL,
        FormatTag::Rtf => native::RTF,
        FormatTag::Html => native::HTML,
        FormatTag::Text => native::TEXT,
        FormatTag::Other(format) => format,
    }
}

fn is_meta_target(format: &str) -> bool {
    META_TARGETS.contains(&format)
}

/// Clipboard file references arrive as `file://` URLs on most platforms
fn file_path(reference: &str) -> PathBuf {
    Url::parse(reference)
        .ok()
        .filter(|url| url.scheme() == "file")
        .and_then(|url| url.to_file_path().ok())
        .unwrap_or_else(|| PathBuf::from(reference))
}

/// Change counter derived from content fingerprints.
///
/// clipboard-rs exposes no change count, so the counter advances each
/// time the fingerprint of the clipboard differs from the previous one.
#[derive(Debug, Default)]
struct ChangeTracker {
    fingerprint: Option<u64>,
    count: u64,
}

impl ChangeTracker {
    fn observe(&mut self, fingerprint: u64) -> u64 {
        if self.fingerprint != Some(fingerprint) {
            if self.fingerprint.is_some() {
                self.count += 1;
            }
            self.fingerprint = Some(fingerprint);
        }
        self.count
    }
}

fn fingerprint(entries: &[PayloadEntry]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for entry in entries {
        entry.tag.hash(&mut hasher);
        entry.data.hash(&mut hasher);
    }
    hasher.finish()
}

/// System clipboard adapter using clipboard-rs
#[derive(Clone, Default)]
pub struct NativeClipboard {
    tracker: Arc<Mutex<ChangeTracker>>,
}

impl NativeClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn open() -> Result<ClipboardContext, ClipboardError> {
        ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

fn data_formats(ctx: &ClipboardContext) -> Result<Vec<String>, ClipboardError> {
    let formats = ctx
        .available_formats()
        .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;
    Ok(formats.into_iter().filter(|f| !is_meta_target(f)).collect())
}

/// Tagged payload for classification: typed getters for text, files and
/// images, raw bytes for everything else.
fn read_payload(ctx: &ClipboardContext) -> Result<ClipboardPayload, ClipboardError> {
    let mut payload = ClipboardPayload::new();

    for format in data_formats(ctx)? {
        match tag_for_format(&format) {
            FormatTag::Text | FormatTag::FileUrl => {}
            tag => match ctx.get_buffer(&format) {
                Ok(data) => payload.push(PayloadEntry::new(tag, data)),
                Err(e) => debug!(%format, error = %e, "clipboard format unreadable, skipped"),
            },
        }
    }

    if ctx.has(ContentFormat::Files) {
        if let Ok(files) = ctx.get_files() {
            for reference in &files {
                payload.push(PayloadEntry::file(file_path(reference)));
            }
        }
    }

    // Bitmaps under a platform name we do not map (e.g. CF_DIB)
    let has_bitmap = payload.has(&FormatTag::Tiff) || payload.has(&FormatTag::Png);
    if !has_bitmap && ctx.has(ContentFormat::Image) {
        match ctx.get_image().and_then(|image| image.to_png()) {
            Ok(png) => payload.push(PayloadEntry::new(FormatTag::Png, png.get_bytes().to_vec())),
            Err(e) => debug!(error = %e, "clipboard image could not be encoded"),
        }
    }

    if ctx.has(ContentFormat::Text) {
        if let Ok(text) = ctx.get_text() {
            payload.push(PayloadEntry::text(FormatTag::Text, text));
        }
    }

    Ok(payload)
}

/// Raw bytes of every advertised format, plus the file list
fn take_snapshot(ctx: &ClipboardContext) -> Result<ClipboardSnapshot, ClipboardError> {
    let mut entries = Vec::new();

    for format in data_formats(ctx)? {
        let tag = tag_for_format(&format);
        if tag == FormatTag::FileUrl {
            continue;
        }
        match ctx.get_buffer(&format) {
            Ok(data) => entries.push(PayloadEntry::new(tag, data)),
            Err(e) => warn!(%format, error = %e, "clipboard format left out of snapshot"),
        }
    }

    if ctx.has(ContentFormat::Files) {
        if let Ok(files) = ctx.get_files() {
            entries.extend(
                files
                    .into_iter()
                    .map(|reference| PayloadEntry::text(FormatTag::FileUrl, reference)),
            );
        }
    }

    Ok(ClipboardSnapshot::new(entries))
}

fn text_or_raw(tag: &FormatTag, data: Vec<u8>, wrap: fn(String) -> ClipboardContent) -> ClipboardContent {
    match String::from_utf8(data) {
        Ok(text) => wrap(text),
        Err(e) => ClipboardContent::Other(native_format(tag).to_string(), e.into_bytes()),
    }
}

/// Contents for one clipboard write, one per snapshot entry; file
/// references are collected into a single file list.
fn restore_contents(snapshot: ClipboardSnapshot) -> Vec<ClipboardContent> {
    let mut contents = Vec::new();
    let mut files = Vec::new();

    for PayloadEntry { tag, data } in snapshot.into_entries() {
        let content = match tag {
            FormatTag::FileUrl => {
                files.push(String::from_utf8_lossy(&data).into_owned());
                continue;
            }
            FormatTag::Text => text_or_raw(&tag, data, ClipboardContent::Text),
            FormatTag::Html => text_or_raw(&tag, data, ClipboardContent::Html),
            FormatTag::Rtf => text_or_raw(&tag, data, ClipboardContent::Rtf),
            FormatTag::Other(format) => ClipboardContent::Other(format, data),
            tag => ClipboardContent::Other(native_format(&tag).to_string(), data),
        };
        contents.push(content);
    }

    if !files.is_empty() {
        contents.push(ClipboardContent::Files(files));
    }
    contents
}

#[async_trait]
impl Clipboard for NativeClipboard {
    async fn read(&self) -> Result<ClipboardPayload, ClipboardError> {
        // clipboard-rs calls block, so run in spawn_blocking
        tokio::task::spawn_blocking(|| read_payload(&Self::open()?))
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn change_count(&self) -> Result<u64, ClipboardError> {
        let tracker = Arc::clone(&self.tracker);
        tokio::task::spawn_blocking(move || {
            let snapshot = take_snapshot(&Self::open()?)?;
            let fingerprint = fingerprint(snapshot.entries());
            let mut tracker = tracker.lock().unwrap_or_else(|e| e.into_inner());
            Ok(tracker.observe(fingerprint))
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn snapshot(&self) -> Result<ClipboardSnapshot, ClipboardError> {
        tokio::task::spawn_blocking(|| take_snapshot(&Self::open()?))
            .await
            .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn restore(&self, snapshot: ClipboardSnapshot) -> Result<(), ClipboardError> {
        tokio::task::spawn_blocking(move || {
            let ctx = Self::open()?;
            let contents = restore_contents(snapshot);
            let written = if contents.is_empty() {
                ctx.clear()
            } else {
                ctx.set(contents)
            };
            written.map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats_map_both_ways() {
        for tag in [
            FormatTag::Pdf,
            FormatTag::Tiff,
            FormatTag::Png,
            FormatTag::FileUrl,
            FormatTag::Rtf,
            FormatTag::Html,
            FormatTag::Text,
        ] {
            assert_eq!(tag_for_format(native_format(&tag)), tag);
        }
    }

    #[test]
    fn unknown_format_keeps_its_name() {
        let tag = tag_for_format("com.example.private");
        assert_eq!(tag, FormatTag::Other("com.example.private".to_string()));
        assert_eq!(native_format(&tag), "com.example.private");
    }

    #[test]
    fn selection_meta_targets_are_skipped() {
        assert!(is_meta_target("TARGETS"));
        assert!(is_meta_target("TIMESTAMP"));
        assert!(!is_meta_target("UTF8_STRING"));
    }

    #[cfg(unix)]
    #[test]
    fn file_urls_become_paths() {
        assert_eq!(file_path("file:///tmp/a%20b.pdf"), PathBuf::from("/tmp/a b.pdf"));
        assert_eq!(file_path("/tmp/plain.txt"), PathBuf::from("/tmp/plain.txt"));
    }

    #[test]
    fn every_snapshot_entry_is_written_back() {
        let snapshot = ClipboardSnapshot::new(vec![
            PayloadEntry::text(FormatTag::Text, "a"),
            PayloadEntry::text(FormatTag::Rtf, r"{\rtf1 a}"),
            PayloadEntry::new(FormatTag::Other("com.app.x".to_string()), vec![1, 2, 3]),
            PayloadEntry::new(FormatTag::Pdf, b"%PDF-1.4".to_vec()),
            PayloadEntry::text(FormatTag::FileUrl, "file:///tmp/one.txt"),
            PayloadEntry::text(FormatTag::FileUrl, "file:///tmp/two.txt"),
        ]);

        let contents = restore_contents(snapshot);

        assert_eq!(contents.len(), 5);
        assert!(matches!(&contents[0], ClipboardContent::Text(t) if t == "a"));
        assert!(matches!(&contents[1], ClipboardContent::Rtf(r) if r == r"{\rtf1 a}"));
        assert!(matches!(
            &contents[2],
            ClipboardContent::Other(f, d) if f == "com.app.x" && d == &vec![1, 2, 3]
        ));
        assert!(matches!(
            &contents[3],
            ClipboardContent::Other(f, d) if f == native::PDF && d.starts_with(b"%PDF")
        ));
        assert!(matches!(&contents[4], ClipboardContent::Files(files) if files.len() == 2));
    }

    #[test]
    fn non_utf8_text_is_written_raw() {
        let snapshot = ClipboardSnapshot::new(vec![PayloadEntry::new(FormatTag::Html, vec![0xff, 0xfe])]);
        let contents = restore_contents(snapshot);
        assert!(matches!(
            &contents[0],
            ClipboardContent::Other(f, d) if f == native::HTML && d == &vec![0xff, 0xfe]
        ));
    }

    #[test]
    fn fingerprint_follows_content() {
        let a = [PayloadEntry::text(FormatTag::Text, "a")];
        let b = [PayloadEntry::text(FormatTag::Text, "b")];
        assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn tracker_starts_at_zero_and_counts_changes() {
        let mut tracker = ChangeTracker::default();
        assert_eq!(tracker.observe(7), 0);
        assert_eq!(tracker.observe(7), 0);
        assert_eq!(tracker.observe(8), 1);
        assert_eq!(tracker.observe(7), 2);
        assert_eq!(tracker.observe(7), 2);
    }
}
