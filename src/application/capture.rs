//! Clipboard capture use case

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::domain::capture::{
    text_preview, CaptureResult, CaptureTime, CaptureTrigger, ClipboardPayload, ClipboardSnapshot,
    ContentKind, DestinationPlan, PathPlanner, MULTIPLE_FILES_NAME,
};
use crate::domain::schedule::Interval;

use super::ports::{
    Clipboard, ClipboardError, Notification, Notifier, SelectionCopier, StorageError,
    StorageHandle, StorageRoot,
};
use super::sniffer::{ContentSniffer, Sniffed, SniffedContent};

/// Errors that abort a capture before anything is classified
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("No storage folder configured. Run 'clip-stash config set storage_root <dir>'")]
    NoRootConfigured,

    #[error("Storage folder could not be resolved: {0}")]
    ResolutionFailed(String),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Failure to persist a single item. Logged, never propagated.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to create folder {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Per-service capture settings
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Sort captures into category subfolders
    pub organize_by_type: bool,
    /// Show a notification after each successful capture
    pub notify: bool,
    /// Wait between the simulated copy and reading the clipboard
    pub copy_delay: Interval,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            organize_by_type: true,
            notify: true,
            copy_delay: Interval::default_copy_delay(),
        }
    }
}

/// Snapshot, sniff, plan, persist, restore, report.
pub struct ClipboardCaptureService<C, P, S, N>
where
    C: Clipboard,
    P: SelectionCopier,
    S: StorageRoot,
    N: Notifier,
{
    clipboard: C,
    copier: P,
    root: S,
    notifier: N,
    sniffer: ContentSniffer,
    options: CaptureOptions,
    serial: Mutex<()>,
}

impl<C, P, S, N> ClipboardCaptureService<C, P, S, N>
where
    C: Clipboard,
    P: SelectionCopier,
    S: StorageRoot,
    N: Notifier,
{
    pub fn new(clipboard: C, copier: P, root: S, notifier: N, options: CaptureOptions) -> Self {
        Self {
            clipboard,
            copier,
            root,
            notifier,
            sniffer: ContentSniffer::new(),
            options,
            serial: Mutex::new(()),
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Capture one payload.
    ///
    /// `payload` carries dropped content; `None` reads the live clipboard
    /// (after copying the selection, for a manual capture).
    pub async fn capture(
        &self,
        trigger: CaptureTrigger,
        payload: Option<ClipboardPayload>,
    ) -> Result<CaptureResult, CaptureError> {
        let result = {
            let _serial = self.serial.lock().await;
            self.capture_serialized(trigger, payload).await?
        };

        if result.success && self.options.notify {
            let notification = Notification::for_capture(&result);
            if let Err(e) = self.notifier.notify(&notification).await {
                warn!(error = %e, "notification failed");
            }
        }

        Ok(result)
    }

    async fn capture_serialized(
        &self,
        trigger: CaptureTrigger,
        payload: Option<ClipboardPayload>,
    ) -> Result<CaptureResult, CaptureError> {
        let now = CaptureTime::now();
        debug!(%trigger, "capture started");

        let handle = self.resolve_root().await?;

        let snapshot = if trigger.takes_snapshot() {
            self.take_snapshot().await
        } else {
            None
        };

        let payload = match payload {
            Some(payload) => payload,
            None => match self.read_payload(trigger).await {
                Ok(payload) => payload,
                Err(e) => {
                    handle.release();
                    self.restore(snapshot).await;
                    return Err(e);
                }
            },
        };

        let result = match self.sniffer.sniff(&payload) {
            Some(sniffed) => self.persist(trigger, sniffed, handle.path(), &now).await,
            None => {
                info!(%trigger, "clipboard content not recognized, nothing saved");
                CaptureResult::unrecognized(trigger)
            }
        };

        handle.release();

        if trigger.restores_clipboard() {
            self.restore(snapshot).await;
        }

        Ok(result)
    }

    async fn resolve_root(&self) -> Result<StorageHandle, CaptureError> {
        match self.root.resolve().await {
            Ok(handle) => {
                debug!(root = %handle.path().display(), "storage root resolved");
                Ok(handle)
            }
            Err(StorageError::NoRootConfigured) => {
                error!("no storage folder configured");
                Err(CaptureError::NoRootConfigured)
            }
            Err(StorageError::ResolutionFailed(reason)) => {
                error!(%reason, "storage folder could not be resolved, forgetting it");
                if let Err(e) = self.root.clear().await {
                    warn!(error = %e, "failed to clear stored folder");
                }
                Err(CaptureError::ResolutionFailed(reason))
            }
            Err(other) => Err(CaptureError::ResolutionFailed(other.to_string())),
        }
    }

    async fn take_snapshot(&self) -> Option<ClipboardSnapshot> {
        match self.clipboard.snapshot().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!(error = %e, "clipboard snapshot failed, it will not be restored");
                None
            }
        }
    }

    async fn read_payload(&self, trigger: CaptureTrigger) -> Result<ClipboardPayload, CaptureError> {
        if !trigger.reads_clipboard() {
            return Ok(ClipboardPayload::new());
        }

        if trigger == CaptureTrigger::ManualShortcut {
            if let Err(e) = self.copier.copy_selection().await {
                warn!(error = %e, "selection copy failed, saving clipboard as-is");
            }
            tokio::time::sleep(self.options.copy_delay.as_std()).await;
        }

        Ok(self.clipboard.read().await?)
    }

    async fn restore(&self, snapshot: Option<ClipboardSnapshot>) {
        let Some(snapshot) = snapshot.filter(|s| !s.is_empty()) else {
            return;
        };
        match self.clipboard.restore(snapshot).await {
            Ok(()) => debug!("clipboard restored"),
            Err(e) => warn!(error = %e, "clipboard restore failed"),
        }
    }

    async fn persist(
        &self,
        trigger: CaptureTrigger,
        sniffed: Sniffed,
        root: &Path,
        now: &CaptureTime,
    ) -> CaptureResult {
        let organize = self.options.organize_by_type;
        let kind = sniffed.kind;

        let mut result = CaptureResult {
            success: false,
            kind,
            trigger,
            filename: String::new(),
            text_preview: None,
            saved: Vec::new(),
            failed: 0,
        };

        let bytes = match sniffed.content {
            SniffedContent::Files(sources) => {
                let batch = matches!(kind, ContentKind::MultipleFiles { .. });
                for source in &sources {
                    let plan = PathPlanner::plan_file(source, organize, now);
                    if !batch {
                        result.filename = plan.filename().to_string();
                    }
                    record(&mut result, copy_file(source, &plan, root).await);
                }
                if batch {
                    result.filename = MULTIPLE_FILES_NAME.to_string();
                }
                result.success = !result.saved.is_empty();
                return result;
            }
            SniffedContent::Bytes(bytes) => bytes,
            SniffedContent::Text(text) => {
                if kind == ContentKind::PlainText {
                    result.text_preview = Some(text_preview(&text));
                }
                text.into_bytes()
            }
            SniffedContent::Link { url, raw } => web_link_document(&url, &raw, now).into_bytes(),
        };

        let plan = match trigger {
            CaptureTrigger::Drop => PathPlanner::plan_dropped(kind, organize, now),
            _ => PathPlanner::plan(kind, None, organize, now),
        };
        result.filename = plan.filename().to_string();
        record(&mut result, write_file(&plan, root, &bytes).await);

        result.success = !result.saved.is_empty();
        result
    }
}

fn record(result: &mut CaptureResult, outcome: Result<PathBuf, PersistError>) {
    match outcome {
        Ok(path) => {
            info!(path = %path.display(), "saved");
            result.saved.push(path);
        }
        Err(e) => {
            warn!(error = %e, "item not saved");
            result.failed += 1;
        }
    }
}

async fn ensure_dir(plan: &DestinationPlan, root: &Path) -> Result<PathBuf, PersistError> {
    let dir = plan.directory(root);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| PersistError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    Ok(dir)
}

async fn write_file(plan: &DestinationPlan, root: &Path, bytes: &[u8]) -> Result<PathBuf, PersistError> {
    let path = ensure_dir(plan, root).await?.join(plan.filename());
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| PersistError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

async fn copy_file(source: &Path, plan: &DestinationPlan, root: &Path) -> Result<PathBuf, PersistError> {
    let to = ensure_dir(plan, root).await?.join(plan.filename());
    tokio::fs::copy(source, &to)
        .await
        .map_err(|e| PersistError::Copy {
            from: source.to_path_buf(),
            to: to.clone(),
            source: e,
        })?;
    Ok(to)
}

/// Markdown document saved for a web link
pub fn web_link_document(url: &Url, raw: &str, now: &CaptureTime) -> String {
    let title = url.host_str().unwrap_or("Link");
    format!(
        "# Web Link\n\n[{}]({})\n\nSaved: {}",
        title,
        raw,
        now.display()
    )
}
