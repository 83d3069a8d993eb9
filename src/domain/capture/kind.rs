//! Content kinds and the fixed category tables

use std::fmt;

use serde::Serialize;

/// Category used for display names and subfolder routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Image,
    Pdf,
    WordDocument,
    Spreadsheet,
    Presentation,
    RichText,
    Video,
    Audio,
    Archive,
    Text,
    Html,
    WebLink,
    Code,
    File,
}

impl Category {
    /// Categorize a file by its extension (case-insensitive, no leading dot)
    pub fn from_extension(extension: &str) -> Self {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "tiff" | "webp" | "heic" => Self::Image,
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::WordDocument,
            "xls" | "xlsx" => Self::Spreadsheet,
            "ppt" | "pptx" => Self::Presentation,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => Self::Video,
            "mp3" | "wav" | "aac" | "flac" | "m4a" => Self::Audio,
            "zip" | "rar" | "7z" | "tar" | "gz" => Self::Archive,
            "txt" | "md" | "markdown" => Self::Text,
            "html" | "htm" => Self::Html,
            "css" | "js" | "json" | "xml" | "yaml" | "yml" => Self::Code,
            _ => Self::File,
        }
    }

    /// Human-readable name
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Pdf => "PDF",
            Self::WordDocument => "Word Document",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
            Self::RichText => "Rich Text",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archive => "Archive",
            Self::Text => "Text",
            Self::Html => "HTML",
            Self::WebLink => "Web Link",
            Self::Code => "Code",
            Self::File => "File",
        }
    }

    /// Subfolder used when organizing by type
    pub const fn subfolder(&self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Pdf => "PDFs",
            Self::WordDocument | Self::Spreadsheet | Self::Presentation | Self::RichText => {
                "Documents"
            }
            Self::Video => "Videos",
            Self::Audio => "Audio",
            Self::Archive => "Archives",
            Self::Text => "Text",
            Self::Html | Self::WebLink => "Web",
            Self::Code => "Code",
            Self::File => "Files",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single kind chosen for a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Pdf,
    Image,
    MultipleFiles { count: usize },
    SingleFile { category: Category },
    RichText,
    Html,
    WebLink,
    PlainText,
    Unrecognized,
}

impl ContentKind {
    /// Category driving the subfolder and display name
    pub const fn category(&self) -> Category {
        match self {
            Self::Pdf => Category::Pdf,
            Self::Image => Category::Image,
            Self::SingleFile { category } => *category,
            Self::RichText => Category::RichText,
            Self::Html => Category::Html,
            Self::WebLink => Category::WebLink,
            Self::PlainText => Category::Text,
            Self::MultipleFiles { .. } | Self::Unrecognized => Category::File,
        }
    }

    /// Filename prefix for generated (non-file) content
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Pdf | Self::RichText => "document",
            Self::Image => "image",
            Self::Html => "webpage",
            Self::WebLink => "link",
            Self::PlainText => "text",
            Self::MultipleFiles { .. } | Self::SingleFile { .. } | Self::Unrecognized => "file",
        }
    }

    /// Extension for generated (non-file) content
    pub const fn default_extension(&self) -> Option<&'static str> {
        match self {
            Self::Pdf => Some("pdf"),
            Self::Image => Some("png"),
            Self::RichText => Some("rtf"),
            Self::Html => Some("html"),
            Self::WebLink | Self::PlainText => Some("txt"),
            Self::MultipleFiles { .. } | Self::SingleFile { .. } | Self::Unrecognized => None,
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Display name used in results and notifications
    pub fn label(&self) -> String {
        match self {
            Self::MultipleFiles { count } => format!("{} Files", count),
            Self::Unrecognized => "Unrecognized".to_string(),
            other => other.category().label().to_string(),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
