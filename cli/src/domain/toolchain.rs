//! Toolchain version parsing: no I/O, no async.
//!
//! Turns the raw output of `node --version` / `npm --version` into a
//! [`ToolchainReport`] or a [`ToolchainError`].

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::error::ToolchainError;

/// Lowest Node.js major version the managed app runs on.
pub const DEFAULT_MIN_NODE_MAJOR: u64 = 16;

static NODE_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: this is a compile-time constant pattern and cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^v(\d+)([\d.]+)").expect("valid regex")
});

static NPM_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^([\d.]+)").expect("valid regex")
});

/// Verified toolchain versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainReport {
    /// Node.js major version.
    pub node_major: u64,
    /// Full Node.js version without the leading `v`, e.g. `18.17.1`.
    pub node_version: String,
    /// npm version, e.g. `9.6.7`.
    pub npm_version: String,
}

/// Validate raw `node --version` and `npm --version` output.
///
/// Unparseable output and an out-of-date major version both block startup.
///
/// # Errors
///
/// Returns `ToolchainError::Missing` if either output does not look like a
/// version, or `ToolchainError::Outdated` if Node.js is older than `min_major`.
pub fn evaluate(
    node_output: &str,
    npm_output: &str,
    min_major: u64,
) -> Result<ToolchainReport, ToolchainError> {
    let node = NODE_VERSION_RE
        .captures(node_output.trim())
        .ok_or(ToolchainError::Missing)?;
    let npm = NPM_VERSION_RE
        .captures(npm_output.trim())
        .ok_or(ToolchainError::Missing)?;

    let major_str = &node[1];
    let node_major: u64 = major_str.parse().map_err(|_| ToolchainError::Missing)?;
    if node_major < min_major {
        return Err(ToolchainError::Outdated {
            found: node_major,
            required: min_major,
        });
    }

    Ok(ToolchainReport {
        node_major,
        node_version: format!("{major_str}{}", &node[2]),
        npm_version: npm[1].to_string(),
    })
}
