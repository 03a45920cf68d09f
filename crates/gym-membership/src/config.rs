use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/gym-membership/config.json";

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct ShellConfig {
    /// JSON catalog to quote from instead of the standard price list.
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn config_path(explicit: Option<&str>) -> PathBuf {
    expand_path(explicit.unwrap_or(DEFAULT_CONFIG_PATH))
}

pub fn load_config(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ShellConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.display()))?;
    Ok(config)
}
