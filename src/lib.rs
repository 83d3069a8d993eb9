//! ClipStash - clipboard and drop capture into an organized folder
//!
//! This crate classifies whatever is on the clipboard (or dropped onto the
//! app), picks a timestamped filename and a category subfolder, writes it
//! into a user-chosen storage folder and puts the user's clipboard back
//! when the capture disturbed it.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Payloads, content kinds, destination planning, config values
//! - **Application**: Content sniffer, capture service, auto-poll monitor and port traits
//! - **Infrastructure**: Adapter implementations (clipboard-rs, enigo, notify-rust, filesystem)
//! - **CLI**: Command-line interface, argument parsing, logging and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
