//! Infrastructure implementation of the `ConfigStore` port.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{ConfigBackup, ConfigStore};
use crate::domain::{AppConfig, ConfigError, InstallError};
use crate::infra::fs::sha256_hex;

/// Production implementation of `ConfigStore` backed by a JSON file on disk.
pub struct JsonConfigStore;

impl ConfigStore for JsonConfigStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config = AppConfig::from_json(&content).map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(config)
    }

    fn write(&self, path: &Path, config: &AppConfig) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }
        let content = config.to_json_pretty().context("cannot serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote config");
        Ok(())
    }

    fn backup(&self, path: &Path) -> Result<Option<ConfigBackup>> {
        match std::fs::read(path) {
            Ok(bytes) => {
                let sha256 = sha256_hex(&bytes);
                tracing::debug!(path = %path.display(), %sha256, "backed up config");
                Ok(Some(ConfigBackup { bytes, sha256 }))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InstallError::io("backing up", path)(e).into()),
        }
    }

    fn restore(&self, path: &Path, backup: &ConfigBackup) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(InstallError::io("creating", parent))?;
        }
        std::fs::write(path, &backup.bytes).map_err(InstallError::io("restoring", path))?;

        let written = std::fs::read(path).map_err(InstallError::io("verifying", path))?;
        let actual = sha256_hex(&written);
        if actual != backup.sha256 {
            return Err(InstallError::io("verifying", path)(std::io::Error::other(format!(
                "digest mismatch: expected {}, found {actual}",
                backup.sha256
            )))
            .into());
        }
        Ok(())
    }
}

/// Where the platform's Minecraft client keeps its worlds.
///
/// Returns `None` when no home directory can be determined.
#[must_use]
pub fn default_minecraft_saves_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        dirs::config_dir()?.join(".minecraft")
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()?.join("minecraft")
    } else {
        dirs::home_dir()?.join(".minecraft")
    };
    Some(base.join("saves"))
}
