//! Content sniffing: pick exactly one kind for a clipboard payload

use std::io::Cursor;
use std::path::PathBuf;

use image::ImageFormat;
use tracing::debug;
use url::Url;

use crate::domain::capture::{Category, ClipboardPayload, ContentKind, FormatTag};

/// Content extracted alongside the kind, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SniffedContent {
    /// Bytes written as-is (PDF, RTF, PNG)
    Bytes(Vec<u8>),
    /// Text written as UTF-8 (HTML, plain text)
    Text(String),
    /// Absolute HTTP(S) URL and the text it was parsed from
    Link { url: Url, raw: String },
    /// Files copied by path
    Files(Vec<PathBuf>),
}

/// A classified payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniffed {
    pub kind: ContentKind,
    pub content: SniffedContent,
}

impl Sniffed {
    fn new(kind: ContentKind, content: SniffedContent) -> Self {
        Self { kind, content }
    }
}

type Rule = fn(&ClipboardPayload) -> Option<Sniffed>;

/// Rules in priority order; the first one that matches wins.
const RULES: &[(&str, Rule)] = &[
    ("pdf", sniff_pdf),
    ("image", sniff_image),
    ("files", sniff_files),
    ("rich_text", sniff_rich_text),
    ("html", sniff_html),
    ("web_link", sniff_web_link),
    ("plain_text", sniff_plain_text),
];

/// Classifies payloads by walking an ordered rule list
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSniffer;

impl ContentSniffer {
    pub fn new() -> Self {
        Self
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        RULES.iter().map(|(name, _)| *name).collect()
    }

    /// Kind of the payload, `Unrecognized` when no rule matches
    pub fn classify(&self, payload: &ClipboardPayload) -> ContentKind {
        self.sniff(payload)
            .map(|s| s.kind)
            .unwrap_or(ContentKind::Unrecognized)
    }

    /// Kind plus the content to persist
    pub fn sniff(&self, payload: &ClipboardPayload) -> Option<Sniffed> {
        let formats: Vec<&str> = payload.entries().iter().map(|e| e.tag.as_str()).collect();
        debug!(?formats, "sniffing payload");

        RULES.iter().find_map(|(name, rule)| {
            let sniffed = rule(payload)?;
            debug!(rule = name, kind = %sniffed.kind, "payload classified");
            Some(sniffed)
        })
    }
}

fn sniff_pdf(payload: &ClipboardPayload) -> Option<Sniffed> {
    let bytes = payload.data(&FormatTag::Pdf)?;
    Some(Sniffed::new(
        ContentKind::Pdf,
        SniffedContent::Bytes(bytes.to_vec()),
    ))
}

fn sniff_image(payload: &ClipboardPayload) -> Option<Sniffed> {
    [FormatTag::Tiff, FormatTag::Png]
        .iter()
        .filter_map(|tag| payload.data(tag).map(|bytes| (tag, bytes)))
        .find_map(|(tag, bytes)| match reencode_png(bytes) {
            Ok(png) => Some(Sniffed::new(ContentKind::Image, SniffedContent::Bytes(png))),
            Err(e) => {
                debug!(format = %tag, error = %e, "image data could not be re-encoded");
                None
            }
        })
}

/// Decode any supported raster and encode it as PNG
pub fn reencode_png(bytes: &[u8]) -> Result<Vec<u8>, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let mut out = Vec::new();
    decoded.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

fn sniff_files(payload: &ClipboardPayload) -> Option<Sniffed> {
    let paths = payload.file_paths();
    let kind = match paths.as_slice() {
        [] => return None,
        [single] => ContentKind::SingleFile {
            category: single
                .extension()
                .map(|e| Category::from_extension(&e.to_string_lossy()))
                .unwrap_or(Category::File),
        },
        many => ContentKind::MultipleFiles { count: many.len() },
    };
    Some(Sniffed::new(kind, SniffedContent::Files(paths)))
}

fn sniff_rich_text(payload: &ClipboardPayload) -> Option<Sniffed> {
    let bytes = payload.data(&FormatTag::Rtf)?;
    Some(Sniffed::new(
        ContentKind::RichText,
        SniffedContent::Bytes(bytes.to_vec()),
    ))
}

fn sniff_html(payload: &ClipboardPayload) -> Option<Sniffed> {
    let bytes = payload.data(&FormatTag::Html)?;
    Some(Sniffed::new(
        ContentKind::Html,
        SniffedContent::Text(String::from_utf8_lossy(bytes).into_owned()),
    ))
}

fn sniff_web_link(payload: &ClipboardPayload) -> Option<Sniffed> {
    let text = payload.text(&FormatTag::Text)?;
    let url = parse_web_link(text)?;
    Some(Sniffed::new(
        ContentKind::WebLink,
        SniffedContent::Link {
            url,
            raw: text.trim().to_string(),
        },
    ))
}

/// Parse text as a single absolute http(s) URL
pub fn parse_web_link(text: &str) -> Option<Url> {
    let candidate = text.trim();
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return None;
    }
    let url = Url::parse(candidate).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

fn sniff_plain_text(payload: &ClipboardPayload) -> Option<Sniffed> {
    let text = payload.text(&FormatTag::Text).filter(|t| !t.is_empty())?;
    Some(Sniffed::new(
        ContentKind::PlainText,
        SniffedContent::Text(text.to_string()),
    ))
}
