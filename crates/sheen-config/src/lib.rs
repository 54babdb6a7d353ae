mod types;

pub use types::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Returns the config directory: <user config dir>/sheen/
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
        .join("sheen");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the config file path: <user config dir>/sheen/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from disk, or return default if not found.
pub fn load_config() -> Result<ShinyConfig> {
    let path = config_path()?;
    if path.exists() {
        let contents = std::fs::read_to_string(&path)?;
        let config = from_toml_str(&contents)?;
        info!(?path, "Loaded config");
        Ok(config)
    } else {
        info!("No config found, using defaults");
        Ok(ShinyConfig::default())
    }
}

/// Save config to disk.
pub fn save_config(config: &ShinyConfig) -> Result<()> {
    let path = config_path()?;
    let contents = toml::to_string_pretty(config)?;
    std::fs::write(&path, contents)?;
    info!(?path, "Saved config");
    Ok(())
}

/// Parse a TOML document, filling missing fields with defaults.
///
/// Dampening values outside [0, 1] are clamped.
pub fn from_toml_str(contents: &str) -> Result<ShinyConfig> {
    let mut config: ShinyConfig = toml::from_str(contents)?;
    let dampening = config.effect.dampening;
    if !dampening.is_in_range() {
        warn!(?dampening, "Dampening out of range, clamping to [0, 1]");
        config.effect.dampening = dampening.clamped();
    }
    Ok(config)
}
