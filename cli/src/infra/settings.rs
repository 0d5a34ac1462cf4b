//! Loads `LauncherSettings` from YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::LauncherSettings;

/// Settings file picked up from the working directory when none is named.
pub const DEFAULT_SETTINGS_FILE: &str = "launcher.yaml";

/// Load settings from `explicit`, else `./launcher.yaml` if present, else
/// built-in defaults.
///
/// # Errors
///
/// Returns an error if an explicitly named file is missing, or if any chosen
/// file cannot be read or parsed.
pub fn load_settings(explicit: Option<&Path>) -> Result<LauncherSettings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let implicit = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !implicit.is_file() {
                tracing::debug!("no {DEFAULT_SETTINGS_FILE}, using built-in settings");
                return Ok(LauncherSettings::default());
            }
            implicit
        }
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let settings: LauncherSettings = serde_yaml::from_str(&content)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded launcher settings");
    Ok(settings)
}
