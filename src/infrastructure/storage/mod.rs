//! Storage root infrastructure module

mod folder;

pub use folder::ConfiguredFolderRoot;
