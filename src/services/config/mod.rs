//! Settings persistence: a TOML file in the platform config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

/// Environment variable overriding the config file location, mainly for
/// tests and containerized deployments.
pub const CONFIG_PATH_ENV: &str = "WORKDESK_CALENDAR_CONFIG";

const CONFIG_FILE_NAME: &str = "calendar.toml";

/// Resolve the settings file path: the env override when set, otherwise
/// the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("app", "workdesk", "workdesk-calendar")
        .context("Could not determine a config directory for this platform")?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load settings, falling back to defaults when no file exists yet. A file
/// that exists but does not parse is an error rather than a silent reset.
pub fn load() -> Result<Settings> {
    let path = config_path()?;
    if !path.exists() {
        log::debug!("no settings file at {}; using defaults", path.display());
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;
    let settings = toml::from_str(&raw)
        .with_context(|| format!("Malformed settings file at {}", path.display()))?;
    Ok(settings)
}

/// Write settings, creating the config directory when needed.
pub fn save(settings: &Settings) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(&path, raw)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}
