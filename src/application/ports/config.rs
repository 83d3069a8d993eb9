//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted configuration
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration (all None when no file exists)
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the configuration, creating parent directories as needed
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the configuration file
    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write a file with defaults. Fails if one already exists.
    async fn init(&self) -> Result<(), ConfigError>;

    /// Load, modify and save in one step
    async fn update<F>(&self, edit: F) -> Result<AppConfig, ConfigError>
    where
        F: FnOnce(&mut AppConfig) + Send,
    {
        let mut config = self.load().await?;
        edit(&mut config);
        self.save(&config).await?;
        Ok(config)
    }
}
