//! Settings file persistence.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Settings;
use crate::error::Result;

/// Overrides the settings file location.
pub const CONFIG_ENV: &str = "STRONGPASS_CONFIG";

pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/strongpass/settings.json", home))
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data + "\n")?;
    debug!("saved settings to {}", path.display());
    Ok(())
}

/// Load settings, writing defaults first if the file is missing or blank.
pub fn load(path: &Path) -> Result<Settings> {
    if !path.exists() {
        info!("no settings at {}, writing defaults", path.display());
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let data = fs::read_to_string(path)?;
    if data.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    let mut settings: Settings = serde_json::from_str(&data)?;
    settings.normalize();
    debug!("loaded settings from {}", path.display());
    Ok(settings)
}
