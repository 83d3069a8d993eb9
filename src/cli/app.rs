//! Command runners

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::ports::{
    Clipboard, ConfigStore, Notifier, SelectionCopier, StorageError, StorageRoot,
};
use crate::application::{
    CaptureError, CaptureOptions, ClipboardCaptureService, ClipboardMonitor, ContentSniffer,
};
use crate::domain::capture::{
    CaptureResult, CaptureTrigger, ClipboardPayload, ContentKind, FormatTag, PayloadEntry,
};
use crate::domain::config::AppConfig;
use crate::domain::schedule::Interval;
use crate::infrastructure::{
    create_copier, create_notifier, NativeClipboard, ConfiguredFolderRoot, XdgConfigStore,
};

use super::args::DropInput;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the configured storage folder
pub const ROOT_ENV_VAR: &str = "CLIP_STASH_ROOT";

/// Errors turning `drop` arguments into a payload
#[derive(Debug, Error)]
pub enum DropError {
    #[error("Failed to read image {path}: {source}")]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Capture service wired to the real adapters
pub type CliCaptureService = ClipboardCaptureService<
    NativeClipboard,
    Box<dyn SelectionCopier>,
    ConfiguredFolderRoot<XdgConfigStore>,
    Box<dyn Notifier>,
>;

/// Settings shared by every capturing command
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Merged configuration (defaults < file < env < flags)
    pub config: AppConfig,
    /// Storage folder from `--root` or the environment, if any
    pub root_override: Option<PathBuf>,
}

impl RunContext {
    pub fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            organize_by_type: self.config.organize_by_type_or_default(),
            notify: self.config.notify_or_default(),
            copy_delay: self.config.copy_delay_or_default(),
        }
    }

    fn storage_root(&self) -> ConfiguredFolderRoot<XdgConfigStore> {
        ConfiguredFolderRoot::with_override(XdgConfigStore::new(), self.root_override.clone())
    }

    /// Build the capture service; `copy_selection` decides whether a manual
    /// capture simulates the copy shortcut first.
    pub fn service(&self, copy_selection: bool) -> CliCaptureService {
        let options = self.capture_options();
        ClipboardCaptureService::new(
            NativeClipboard::new(),
            create_copier(copy_selection),
            self.storage_root(),
            create_notifier(options.notify),
            options,
        )
    }
}

/// `clip-stash save`
pub async fn run_save(ctx: &RunContext, selection: bool, json: bool) -> ExitCode {
    let service = ctx.service(selection);
    let outcome = service.capture(CaptureTrigger::ManualShortcut, None).await;
    report(outcome, json)
}

/// `clip-stash drop`
pub async fn run_drop(ctx: &RunContext, input: DropInput, json: bool) -> ExitCode {
    let presenter = Presenter::new();

    let payload = match drop_payload(input).await {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let service = ctx.service(false);
    let outcome = service.capture(CaptureTrigger::Drop, Some(payload)).await;
    report(outcome, json)
}

/// `clip-stash watch`
pub async fn run_watch(ctx: &RunContext, interval: Option<String>, force: bool) -> ExitCode {
    let presenter = Presenter::new();

    if !ctx.config.auto_save_or_default() && !force {
        presenter.error(
            "Auto-save is off. Enable it with 'clip-stash config set auto_save true' or pass --force",
        );
        return ExitCode::from(EXIT_ERROR);
    }

    let interval = match interval {
        Some(s) => match s.parse::<Interval>() {
            Ok(i) => i,
            Err(e) => {
                presenter.error(&format!("Invalid interval: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => ctx.config.poll_interval_or_default(),
    };

    // Fail fast instead of erroring on every clipboard change
    match ctx.storage_root().resolve().await {
        Ok(handle) => {
            presenter.info(&format!("Saving to {}", handle.path().display()));
            handle.release();
        }
        Err(StorageError::NoRootConfigured) => {
            presenter.error(&CaptureError::NoRootConfigured.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    }

    let service = Arc::new(ctx.service(false));
    let mut monitor = ClipboardMonitor::new(service, interval);

    let shutdown = ShutdownSignal::with_flag(monitor.shutdown_flag());
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    if let Err(e) = monitor.prime().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    presenter.watch_status(&format!("Polling every {} | Ctrl+C: exit", interval));

    monitor
        .run(|outcome| {
            let presenter = Presenter::new();
            match outcome {
                Ok(result) if result.kind == ContentKind::Unrecognized => {
                    debug!("clipboard change not recognized, skipped");
                }
                Ok(result) => presenter.capture(&result),
                Err(e) => presenter.error(&e.to_string()),
            }
        })
        .await;

    presenter.watch_status("Stopped");
    ExitCode::from(EXIT_SUCCESS)
}

/// `clip-stash classify`
pub async fn run_classify() -> ExitCode {
    let presenter = Presenter::new();

    let payload = match NativeClipboard::new().read().await {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let formats: Vec<String> = payload.entries().iter().map(|e| e.tag.to_string()).collect();
    if !formats.is_empty() {
        presenter.info(&format!("Formats: {}", formats.join(", ")));
    }

    let kind = ContentSniffer::new().classify(&payload);
    if kind.is_recognized() {
        presenter.output(&kind.label());
        ExitCode::from(EXIT_SUCCESS)
    } else {
        presenter.warn("Clipboard content not recognized");
        ExitCode::from(EXIT_ERROR)
    }
}

fn report(outcome: Result<CaptureResult, CaptureError>, json: bool) -> ExitCode {
    let presenter = Presenter::new();

    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if json {
        if let Err(e) = presenter.capture_json(&result) {
            presenter.error(&format!("Failed to serialize result: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    } else {
        presenter.capture(&result);
    }

    if result.success {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}

/// Turn `drop` arguments into a payload
pub async fn drop_payload(input: DropInput) -> Result<ClipboardPayload, DropError> {
    match input {
        DropInput::Files(paths) => Ok(ClipboardPayload::from_files(paths)),
        DropInput::Text(text) => Ok(ClipboardPayload::from_text(text)),
        DropInput::Image(path) => {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(source) => return Err(DropError::ReadImage { path, source }),
            };
            Ok(ClipboardPayload::new().with(PayloadEntry::new(image_tag(&path), bytes)))
        }
    }
}

fn image_tag(path: &Path) -> FormatTag {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "tif" | "tiff" => FormatTag::Tiff,
        _ => FormatTag::Png,
    }
}

/// Storage folder from the flag, else from `CLIP_STASH_ROOT`
pub fn root_override(cli_root: Option<PathBuf>) -> Option<PathBuf> {
    cli_root.or_else(|| {
        env::var(ROOT_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    let env_config = AppConfig {
        storage_root: env::var(ROOT_ENV_VAR).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
