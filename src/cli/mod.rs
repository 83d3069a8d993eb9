//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! signal handling, and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    run_classify, run_drop, run_save, run_watch, RunContext, EXIT_ERROR, EXIT_SUCCESS,
    EXIT_USAGE_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, DropInput};
pub use presenter::Presenter;
