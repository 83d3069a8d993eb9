//! Configuration infrastructure module

mod xdg;

pub use xdg::{XdgConfigStore, CONFIG_DIR_NAME};
