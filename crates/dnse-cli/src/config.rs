/*
[INPUT]:  JSON configuration file under the user's home directory
[OUTPUT]: Parsed CLI configuration with defaults
[POS]:    Configuration layer - credential persistence
[UPDATE]: When adding new configuration options
*/

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dnse_adapter::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = ".dnse-cli";
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted CLI configuration: `~/.dnse-cli/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_secret: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Path of the config file, if a home directory can be resolved.
pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the saved configuration. A missing, unreadable, or malformed file
/// degrades to defaults; credentials then have to come from flags or env.
pub fn load() -> CliConfig {
    match config_file() {
        Some(path) => read_from(&path),
        None => CliConfig::default(),
    }
}

/// Writes the configuration and returns where it landed.
pub fn store(config: &CliConfig) -> Result<PathBuf> {
    let path = config_file().context("could not determine home directory")?;
    write_to(&path, config)?;
    Ok(path)
}

/// Resets an existing config file to defaults. No-op when nothing was saved.
pub fn clear() -> Result<Option<PathBuf>> {
    let Some(path) = config_file() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    write_to(&path, &CliConfig::default())?;
    Ok(Some(path))
}

fn read_from(path: &Path) -> CliConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => CliConfig::default(),
    }
}

fn write_to(path: &Path, config: &CliConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
