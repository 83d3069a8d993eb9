//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::schedule::Interval;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder captures are written into
    pub storage_root: Option<String>,
    /// Sort captures into per-category subfolders
    pub organize_by_type: Option<bool>,
    /// Capture every clipboard change while `watch` runs
    pub auto_save: Option<bool>,
    /// Show a desktop notification after each capture
    pub notify: Option<bool>,
    /// How often the clipboard is polled, e.g. "500ms"
    pub poll_interval: Option<String>,
    /// Wait after simulating a copy before reading the clipboard
    pub copy_delay: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            storage_root: None,
            organize_by_type: Some(true),
            auto_save: Some(false),
            notify: Some(true),
            poll_interval: Some(Interval::default_poll().to_string()),
            copy_delay: Some(Interval::default_copy_delay().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            storage_root: other.storage_root.or(self.storage_root),
            organize_by_type: other.organize_by_type.or(self.organize_by_type),
            auto_save: other.auto_save.or(self.auto_save),
            notify: other.notify.or(self.notify),
            poll_interval: other.poll_interval.or(self.poll_interval),
            copy_delay: other.copy_delay.or(self.copy_delay),
        }
    }

    /// Storage root as a path, with a leading `~` expanded
    pub fn storage_root_path(&self) -> Option<PathBuf> {
        self.storage_root
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(expand_home)
    }

    /// Get organize_by_type, or true if not set
    pub fn organize_by_type_or_default(&self) -> bool {
        self.organize_by_type.unwrap_or(true)
    }

    /// Get auto_save, or false if not set
    pub fn auto_save_or_default(&self) -> bool {
        self.auto_save.unwrap_or(false)
    }

    /// Get notify, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get poll_interval as parsed Interval, or default if not set/invalid
    pub fn poll_interval_or_default(&self) -> Interval {
        self.poll_interval
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Interval::default_poll)
    }

    /// Get copy_delay as parsed Interval, or default if not set/invalid
    pub fn copy_delay_or_default(&self) -> Interval {
        self.copy_delay
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Interval::default_copy_delay)
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.storage_root.is_none());
        assert_eq!(config.organize_by_type, Some(true));
        assert_eq!(config.auto_save, Some(false));
        assert_eq!(config.notify, Some(true));
        assert_eq!(config.poll_interval, Some("500ms".to_string()));
        assert_eq!(config.copy_delay, Some("100ms".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.storage_root.is_none());
        assert!(config.organize_by_type.is_none());
        assert!(config.auto_save.is_none());
        assert!(config.poll_interval.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            storage_root: Some("/base".to_string()),
            organize_by_type: Some(true),
            poll_interval: Some("1s".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            storage_root: Some("/other".to_string()),
            organize_by_type: None,
            poll_interval: Some("250ms".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.storage_root, Some("/other".to_string()));
        assert_eq!(merged.organize_by_type, Some(true));
        assert_eq!(merged.poll_interval, Some("250ms".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            storage_root: Some("/stash".to_string()),
            auto_save: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.storage_root, Some("/stash".to_string()));
        assert_eq!(merged.auto_save, Some(true));
    }

    #[test]
    fn boolean_defaults() {
        let config = AppConfig::empty();
        assert!(config.organize_by_type_or_default());
        assert!(!config.auto_save_or_default());
        assert!(config.notify_or_default());
    }

    #[test]
    fn poll_interval_parses_or_defaults() {
        let config = AppConfig {
            poll_interval: Some("2s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.poll_interval_or_default().as_millis(), 2000);

        let invalid = AppConfig {
            poll_interval: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(invalid.poll_interval_or_default().as_millis(), 500);
        assert_eq!(AppConfig::empty().copy_delay_or_default().as_millis(), 100);
    }

    #[test]
    fn storage_root_path_ignores_blank() {
        let config = AppConfig {
            storage_root: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.storage_root_path().is_none());

        let config = AppConfig {
            storage_root: Some("/data/stash".to_string()),
            ..Default::default()
        };
        assert_eq!(config.storage_root_path(), Some(PathBuf::from("/data/stash")));
    }

    #[test]
    fn storage_root_path_expands_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = AppConfig {
            storage_root: Some("~/stash".to_string()),
            ..Default::default()
        };
        assert_eq!(config.storage_root_path(), Some(home.join("stash")));
    }
}
