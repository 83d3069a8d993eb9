//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::schedule::Interval;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let value = validate_config_value(key, value)?;

    let mut config = store.load().await?;
    apply(&mut config, key, &value)?;
    store.save(&config).await?;

    presenter.success(&format!("{} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    let config = store.load().await?;
    presenter.output(config_value(&config, key).as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, config_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

/// Validate a config value and return it in the form that gets stored
fn validate_config_value(key: &str, value: &str) -> Result<String, ConfigError> {
    match key {
        "storage_root" => {
            let candidate = AppConfig {
                storage_root: Some(value.to_string()),
                ..Default::default()
            };
            let path = candidate
                .storage_root_path()
                .ok_or_else(|| invalid(key, "Path must not be empty"))?;
            if !path.is_dir() {
                return Err(invalid(
                    key,
                    format!("'{}' is not an existing directory", path.display()),
                ));
            }
            Ok(value.trim().to_string())
        }
        "organize_by_type" | "auto_save" | "notify" => parse_bool(value)
            .map(|b| b.to_string())
            .map_err(|_| invalid(key, "Value must be 'true' or 'false'")),
        "poll_interval" | "copy_delay" => value
            .parse::<Interval>()
            .map(|i| i.to_string())
            .map_err(|e| invalid(key, e.to_string())),
        _ => Ok(value.to_string()),
    }
}

fn apply(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let flag = || parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"));
    match key {
        "storage_root" => config.storage_root = Some(value.to_string()),
        "organize_by_type" => config.organize_by_type = Some(flag()?),
        "auto_save" => config.auto_save = Some(flag()?),
        "notify" => config.notify = Some(flag()?),
        "poll_interval" => config.poll_interval = Some(value.to_string()),
        "copy_delay" => config.copy_delay = Some(value.to_string()),
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "storage_root" => config.storage_root.clone(),
        "organize_by_type" => config.organize_by_type.map(|b| b.to_string()),
        "auto_save" => config.auto_save.map(|b| b.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "poll_interval" => config.poll_interval.clone(),
        "copy_delay" => config.copy_delay.clone(),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}
