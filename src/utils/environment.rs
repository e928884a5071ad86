use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application directory name under the platform config directory
pub const APP_NAME: &str = "glossary_editor";

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "GLOSSARY_EDITOR_CONFIG_DIR";

pub const HISTORY_FILENAME: &str = "directories.json";

/// Get the configuration directory (`<config_dir>/glossary_editor`)
///
/// `GLOSSARY_EDITOR_CONFIG_DIR` takes precedence when set and non-empty.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir().context("Failed to get platform config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the path of the recent directories document
pub fn get_history_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(HISTORY_FILENAME))
}
