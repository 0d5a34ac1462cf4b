//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Where to send operators whose Node.js toolchain is missing or too old.
pub const NODE_DOWNLOAD_URL: &str = "https://nodejs.org/en/download/";

// ── Toolchain errors ──────────────────────────────────────────────────────────

/// The local runtime the managed app depends on is unusable.
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error(
        "Node.js is not installed or is not configured correctly. Please install Node.js before continuing."
    )]
    Missing,

    #[error(
        "Node.js installation is out of date (found v{found}). Please update to v{required} or greater before continuing."
    )]
    Outdated { found: u64, required: u64 },
}

impl ToolchainError {
    /// Page the operator should visit to fix the toolchain.
    #[must_use]
    pub fn remediation_url(&self) -> &'static str {
        NODE_DOWNLOAD_URL
    }
}

// ── Install errors ────────────────────────────────────────────────────────────

/// Unrecoverable failures while replacing the application directory.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to download {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to extract {}: {reason}", archive.display())]
    Extract { archive: PathBuf, reason: String },

    #[error("{action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InstallError {
    /// Build a closure that wraps an `io::Error` for the given action and path.
    pub fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            action,
            path,
            source,
        }
    }
}

// ── Manifest errors ───────────────────────────────────────────────────────────

/// Failures reading a version manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot fetch manifest from {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("invalid manifest: {0}")]
    Parse(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the persisted application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot parse configuration {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("{key} is required and cannot be empty")]
    Required { key: String },
}

// ── Supervisor errors ─────────────────────────────────────────────────────────

/// Failures starting a supervised child process.
#[derive(Debug, Error)]
pub enum SupervisorError {
    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
