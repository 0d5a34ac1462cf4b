//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod manifest;
pub mod prompt;
pub mod settings;
pub mod toolchain;

pub use config::{AppConfig, ConfigKey};
pub use error::{ConfigError, InstallError, ManifestError, SupervisorError, ToolchainError};
pub use manifest::VersionManifest;
pub use settings::{CommandSpec, LauncherSettings};
pub use toolchain::ToolchainReport;
