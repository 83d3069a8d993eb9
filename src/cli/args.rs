//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::config::AppConfig;

/// ClipStash - file clipboard and dropped content into an organized folder
#[derive(Parser, Debug)]
#[command(name = "clip-stash")]
#[command(version)]
#[command(about = "Capture clipboard and dropped content into a folder, organized by content type")]
#[command(long_about = None)]
pub struct Cli {
    /// Storage folder for this run (overrides config and CLIP_STASH_ROOT)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Write everything directly into the storage folder, no category subfolders
    #[arg(long, global = true)]
    pub flat: bool,

    /// Do not show desktop notifications
    #[arg(long, global = true)]
    pub no_notify: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config values given as flags
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            organize_by_type: if self.flat { Some(false) } else { None },
            notify: if self.no_notify { Some(false) } else { None },
            ..Default::default()
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save what is on the clipboard (or the current selection) now
    Save {
        /// Copy the selection in the focused app first, then restore the clipboard
        #[arg(short = 's', long)]
        selection: bool,

        /// Print the capture result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save files, text or an image as if dropped onto the app
    Drop {
        /// Files to copy into the storage folder
        #[arg(value_name = "PATH", required_unless_present_any = ["text", "image"])]
        paths: Vec<PathBuf>,

        /// Text to save
        #[arg(long, value_name = "TEXT", conflicts_with_all = ["paths", "image"])]
        text: Option<String>,

        /// Image file to save as PNG
        #[arg(long, value_name = "FILE", conflicts_with = "paths")]
        image: Option<PathBuf>,

        /// Print the capture result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Capture every clipboard change until interrupted
    Watch {
        /// Poll interval (e.g., 500ms, 1s)
        #[arg(short = 'i', long, value_name = "TIME")]
        interval: Option<String>,

        /// Run even when auto_save is off in the config
        #[arg(long)]
        force: bool,
    },
    /// Print the content kind of the current clipboard without saving
    Classify,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// What a `drop` invocation carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropInput {
    Files(Vec<PathBuf>),
    Text(String),
    Image(PathBuf),
}

impl DropInput {
    pub fn from_args(paths: Vec<PathBuf>, text: Option<String>, image: Option<PathBuf>) -> Option<Self> {
        match (text, image) {
            (Some(text), _) => Some(Self::Text(text)),
            (None, Some(image)) => Some(Self::Image(image)),
            (None, None) if !paths.is_empty() => Some(Self::Files(paths)),
            (None, None) => None,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "storage_root",
    "organize_by_type",
    "auto_save",
    "notify",
    "poll_interval",
    "copy_delay",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_save_defaults() {
        let cli = Cli::parse_from(["clip-stash", "save"]);
        assert!(matches!(
            cli.command,
            Commands::Save {
                selection: false,
                json: false
            }
        ));
        assert!(cli.root.is_none());
        assert!(!cli.flat);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "clip-stash", "save", "--selection", "--root", "/tmp/stash", "--flat", "--no-notify", "-vv",
        ]);
        assert!(matches!(cli.command, Commands::Save { selection: true, .. }));
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/stash")));
        assert_eq!(cli.verbose, 2);

        let config = cli.to_config();
        assert_eq!(config.organize_by_type, Some(false));
        assert_eq!(config.notify, Some(false));
        assert_eq!(config.storage_root, None);
    }

    #[test]
    fn flags_absent_leave_config_unset() {
        let cli = Cli::parse_from(["clip-stash", "classify"]);
        assert_eq!(cli.to_config(), AppConfig::empty());
    }

    #[test]
    fn cli_parses_drop_paths() {
        let cli = Cli::parse_from(["clip-stash", "drop", "a.pdf", "b.png"]);
        if let Commands::Drop { paths, text, image, .. } = cli.command {
            assert_eq!(
                DropInput::from_args(paths, text, image),
                Some(DropInput::Files(vec!["a.pdf".into(), "b.png".into()]))
            );
        } else {
            panic!("Expected Drop command");
        }
    }

    #[test]
    fn cli_parses_drop_text() {
        let cli = Cli::parse_from(["clip-stash", "drop", "--text", "hello there"]);
        if let Commands::Drop { paths, text, image, .. } = cli.command {
            assert_eq!(
                DropInput::from_args(paths, text, image),
                Some(DropInput::Text("hello there".to_string()))
            );
        } else {
            panic!("Expected Drop command");
        }
    }

    #[test]
    fn drop_requires_something() {
        assert!(Cli::try_parse_from(["clip-stash", "drop"]).is_err());
        assert!(Cli::try_parse_from(["clip-stash", "drop", "a.txt", "--text", "x"]).is_err());
    }

    #[test]
    fn cli_parses_watch() {
        let cli = Cli::parse_from(["clip-stash", "watch", "-i", "250ms", "--force"]);
        if let Commands::Watch { interval, force } = cli.command {
            assert_eq!(interval.as_deref(), Some("250ms"));
            assert!(force);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["clip-stash", "config", "set", "storage_root", "~/Stash"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "storage_root");
            assert_eq!(value, "~/Stash");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("storage_root"));
        assert!(is_valid_config_key("poll_interval"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
