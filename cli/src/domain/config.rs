//! Domain types and validators for the managed app's `config.json`.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Answer that leaves the optional shortcut unset.
pub const SKIP_SENTINEL: &str = "optional";

// ── Config schema ────────────────────────────────────────────────────────────

/// The managed app's configuration, persisted next to its sources.
///
/// Field names on disk are upper-case; reads accept any casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "IPFS_API")]
    pub ipfs_api: String,
    #[serde(rename = "IPFS_GATEWAY")]
    pub ipfs_gateway: String,
    #[serde(rename = "ETHEREUM_RPC_URL")]
    pub ethereum_rpc_url: String,
    #[serde(rename = "MINECRAFT_SAVES_DIR")]
    pub minecraft_saves_dir: String,
    #[serde(
        rename = "MINECRAFT_SHORTCUT",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minecraft_shortcut: Option<String>,
}

impl AppConfig {
    /// Defaults offered to the operator on first run.
    #[must_use]
    pub fn with_defaults(minecraft_saves_dir: &str) -> Self {
        Self {
            ipfs_api: "http://localhost:5001/".to_string(),
            ipfs_gateway: "http://localhost:8080/".to_string(),
            ethereum_rpc_url: "https://cloudflare-eth.com/".to_string(),
            minecraft_saves_dir: minecraft_saves_dir.to_string(),
            minecraft_shortcut: None,
        }
    }

    /// Parse the on-disk JSON, matching field names case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the document is not an object
    /// or a required field is missing.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let serde_json::Value::Object(object) = value else {
            return Err("expected a JSON object".to_string());
        };
        let normalized: serde_json::Map<String, serde_json::Value> = object
            .into_iter()
            .map(|(k, v)| (k.to_ascii_uppercase(), v))
            .collect();
        serde_json::from_value(serde_json::Value::Object(normalized)).map_err(|e| e.to_string())
    }

    /// Serialize with stable two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Current value of `key`, `None` when an optional field is unset.
    #[must_use]
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::IpfsApi => Some(&self.ipfs_api),
            ConfigKey::IpfsGateway => Some(&self.ipfs_gateway),
            ConfigKey::EthereumRpcUrl => Some(&self.ethereum_rpc_url),
            ConfigKey::MinecraftSavesDir => Some(&self.minecraft_saves_dir),
            ConfigKey::MinecraftShortcut => self.minecraft_shortcut.as_deref(),
        }
    }

    /// Assign `value` to `key`.
    ///
    /// For the optional shortcut, an empty value or [`SKIP_SENTINEL`] unsets it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Required` when a required field would become empty.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let slot = match key {
            ConfigKey::IpfsApi => &mut self.ipfs_api,
            ConfigKey::IpfsGateway => &mut self.ipfs_gateway,
            ConfigKey::EthereumRpcUrl => &mut self.ethereum_rpc_url,
            ConfigKey::MinecraftSavesDir => &mut self.minecraft_saves_dir,
            ConfigKey::MinecraftShortcut => {
                self.minecraft_shortcut =
                    (!value.is_empty() && value != SKIP_SENTINEL).then(|| value.to_string());
                return Ok(());
            }
        };
        if value.is_empty() {
            return Err(ConfigError::Required {
                key: key.name().to_string(),
            });
        }
        *slot = value.to_string();
        Ok(())
    }

    /// Clear an optional field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Required` for required fields.
    pub fn unset(&mut self, key: ConfigKey) -> Result<(), ConfigError> {
        if !key.is_optional() {
            return Err(ConfigError::Required {
                key: key.name().to_string(),
            });
        }
        self.minecraft_shortcut = None;
        Ok(())
    }
}

// ── Keys ─────────────────────────────────────────────────────────────────────

/// A named field of [`AppConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    IpfsApi,
    IpfsGateway,
    EthereumRpcUrl,
    MinecraftSavesDir,
    MinecraftShortcut,
}

impl ConfigKey {
    /// Every key, in prompt and display order.
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::IpfsApi,
        ConfigKey::IpfsGateway,
        ConfigKey::EthereumRpcUrl,
        ConfigKey::MinecraftSavesDir,
        ConfigKey::MinecraftShortcut,
    ];

    /// On-disk field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::IpfsApi => "IPFS_API",
            ConfigKey::IpfsGateway => "IPFS_GATEWAY",
            ConfigKey::EthereumRpcUrl => "ETHEREUM_RPC_URL",
            ConfigKey::MinecraftSavesDir => "MINECRAFT_SAVES_DIR",
            ConfigKey::MinecraftShortcut => "MINECRAFT_SHORTCUT",
        }
    }

    /// Question shown when asking the operator for this value.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            ConfigKey::IpfsApi => "IPFS API URL:",
            ConfigKey::IpfsGateway => "IPFS Gateway URL:",
            ConfigKey::EthereumRpcUrl => "Ethereum RPC URL:",
            ConfigKey::MinecraftSavesDir => "Minecraft Saves Directory:",
            ConfigKey::MinecraftShortcut => "Minecraft Shortcut:",
        }
    }

    #[must_use]
    pub fn is_optional(self) -> bool {
        self == ConfigKey::MinecraftShortcut
    }

    /// Look up a key by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` listing the valid names.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ConfigError::UnknownKey {
                key: name.to_string(),
                valid: Self::ALL.map(ConfigKey::name).join(", "),
            })
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
