//! Destination planning: subfolder and filename for captured content

use std::path::{Path, PathBuf};

use super::kind::{Category, ContentKind};
use super::timestamp::CaptureTime;

/// Marks generated content that arrived by drag and drop
pub const DROPPED_PREFIX: &str = "dropped";

/// Where one captured item will be written, relative to the storage root.
///
/// Two captures planned within the same second produce the same filename;
/// the later write replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    subfolder: Option<String>,
    filename: String,
}

impl DestinationPlan {
    pub fn subfolder(&self) -> Option<&str> {
        self.subfolder.as_deref()
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Directory the file lands in
    pub fn directory(&self, root: &Path) -> PathBuf {
        match &self.subfolder {
            Some(subfolder) => root.join(subfolder),
            None => root.to_path_buf(),
        }
    }

    /// Full destination path
    pub fn path(&self, root: &Path) -> PathBuf {
        self.directory(root).join(&self.filename)
    }
}

/// Derives destination plans from a kind, a timestamp and the
/// organize-by-type flag.
pub struct PathPlanner;

impl PathPlanner {
    /// Plan generated content (`<prefix>_<timestamp>.<ext>`).
    ///
    /// `extension` overrides the kind's default extension.
    pub fn plan(
        kind: ContentKind,
        extension: Option<&str>,
        organize_by_type: bool,
        now: &CaptureTime,
    ) -> DestinationPlan {
        let extension = extension.or_else(|| kind.default_extension());
        Self::build(kind.prefix(), extension, kind.category(), organize_by_type, now)
    }

    /// Plan dropped generated content (`dropped_<prefix>_<timestamp>.<ext>`).
    pub fn plan_dropped(kind: ContentKind, organize_by_type: bool, now: &CaptureTime) -> DestinationPlan {
        let prefix = format!("{}_{}", DROPPED_PREFIX, kind.prefix());
        Self::build(&prefix, kind.default_extension(), kind.category(), organize_by_type, now)
    }

    /// Plan a copied file (`<basename>_<timestamp>.<ext>`), categorized by
    /// its own extension.
    pub fn plan_file(source: &Path, organize_by_type: bool, now: &CaptureTime) -> DestinationPlan {
        let extension = source
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        let base = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "file".to_string());
        let category = extension
            .as_deref()
            .map(Category::from_extension)
            .unwrap_or(Category::File);

        Self::build(&base, extension.as_deref(), category, organize_by_type, now)
    }

    fn build(
        prefix: &str,
        extension: Option<&str>,
        category: Category,
        organize_by_type: bool,
        now: &CaptureTime,
    ) -> DestinationPlan {
        let stamp = now.file_stamp();
        let filename = match extension.filter(|e| !e.is_empty()) {
            Some(ext) => format!("{}_{}.{}", prefix, stamp, ext),
            None => format!("{}_{}", prefix, stamp),
        };

        DestinationPlan {
            subfolder: organize_by_type.then(|| category.subfolder().to_string()),
            filename,
        }
    }
}
