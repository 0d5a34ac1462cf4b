//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{AppConfig, CommandSpec, VersionManifest};

// ── Manifest Port ─────────────────────────────────────────────────────────────

/// Reads version manifests from disk or from the remote repository.
pub trait ManifestSource {
    /// Read the manifest of an installed app.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has no `version`.
    fn read_local(&self, path: &Path) -> Result<VersionManifest>;

    /// Fetch the manifest published for the tracked branch.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or an
    /// invalid document. Never retried.
    fn read_remote(&self, url: &str) -> Result<VersionManifest>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Raw snapshot of a config file taken before its directory is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBackup {
    /// File content, byte for byte.
    pub bytes: Vec<u8>,
    /// Hex-encoded SHA-256 of `bytes`.
    pub sha256: String,
}

/// Persistence of the managed app's `config.json`.
pub trait ConfigStore {
    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    fn read(&self, path: &Path) -> Result<AppConfig>;

    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, config: &AppConfig) -> Result<()>;

    /// Snapshot the raw file, or `None` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn backup(&self, path: &Path) -> Result<Option<ConfigBackup>>;

    /// Write a snapshot back verbatim and verify its digest.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails or the written bytes do not match.
    fn restore(&self, path: &Path, backup: &ConfigBackup) -> Result<()>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations used while replacing an installation.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    fn remove_file(&self, path: &Path) -> std::io::Result<()>;

    /// # Errors
    ///
    /// Propagates the underlying I/O error.
    fn remove_dir_all(&self, path: &Path) -> std::io::Result<()>;
}

// ── Archive Port ──────────────────────────────────────────────────────────────

/// Retrieval and unpacking of the branch archive.
pub trait ArchiveSource {
    /// Download `url` to `dest`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::Network` on transport failure or
    /// `InstallError::Io` if `dest` cannot be written.
    fn download(&self, url: &str, dest: &Path) -> Result<u64>;

    /// Unpack `archive` into the directory `into`.
    ///
    /// # Errors
    ///
    /// Returns `InstallError::Extract` if the archive is corrupt.
    fn extract(&self, archive: &Path, into: &Path) -> Result<()>;
}

// ── Process Supervision Port ──────────────────────────────────────────────────

/// Everything needed to run one child process under supervision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub program: String,
    pub args: Vec<String>,
    /// Defaults to the launcher's own working directory when `None`.
    pub working_dir: Option<PathBuf>,
    /// Return the accumulated stdout to the caller.
    pub capture_output: bool,
    /// Echo stderr lines to the console.
    pub log_errors: bool,
    /// Echo stdout lines to the console.
    pub log_stdout: bool,
    /// Merged on top of the inherited environment.
    pub env: Vec<(String, String)>,
    /// Spawn with all standard streams closed and return without waiting.
    pub detached: bool,
}

impl RunRequest {
    /// A request that echoes errors only and captures nothing.
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            working_dir: None,
            capture_output: false,
            log_errors: true,
            log_stdout: false,
            env: Vec::new(),
            detached: false,
        }
    }

    #[must_use]
    pub fn from_spec(spec: &CommandSpec) -> Self {
        Self::new(&spec.program).args(spec.args.iter().map(String::as_str))
    }

    #[must_use]
    pub fn args<'a>(mut self, args: impl IntoIterator<Item = &'a str>) -> Self {
        self.args.extend(args.into_iter().map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    #[must_use]
    pub fn capture(mut self, on: bool) -> Self {
        self.capture_output = on;
        self
    }

    #[must_use]
    pub fn log_errors(mut self, on: bool) -> Self {
        self.log_errors = on;
        self
    }

    #[must_use]
    pub fn log_stdout(mut self, on: bool) -> Self {
        self.log_stdout = on;
        self
    }

    #[must_use]
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Fire-and-forget: the child (and anything it forks) may outlive `run`.
    #[must_use]
    pub fn detach(mut self, on: bool) -> Self {
        self.detached = on;
        self
    }
}

/// Result of a supervised run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Exit status; callers decide whether a failure matters. Always success
    /// for a detached run, whose real status is only logged.
    pub status: ExitStatus,
    /// Captured stdout lines joined by the platform line separator, or empty
    /// when capture was not requested.
    pub output: String,
}

/// Spawns a child, multiplexes its output streams and waits for it to exit.
#[allow(async_fn_in_trait)]
pub trait ProcessSupervisor {
    /// Run `request` to completion. No timeout: a hung child blocks forever.
    /// A detached request returns as soon as the child has been spawned.
    ///
    /// # Errors
    ///
    /// Returns `SupervisorError::Spawn` if the process cannot be started, or
    /// an error if waiting on it fails.
    async fn run(&self, request: &RunRequest) -> Result<RunOutcome>;
}

/// Operator console the supervisor echoes child output to.
///
/// Called from both stream readers, so implementations must serialize any
/// shared terminal state themselves.
pub trait ConsoleSink: Sync {
    fn stdout_line(&self, line: &str);
    fn stderr_line(&self, line: &str);
    /// Put the launcher's window title back after a child changed it.
    fn reassert_title(&self);
}

// ── Operator Input Port ───────────────────────────────────────────────────────

/// Line-based operator input, swappable for scripted answers in tests.
pub trait Prompter {
    /// Ask `text`; an empty answer yields `default` (or `""`).
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read (e.g. stdin closed).
    fn prompt(&self, text: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question and return the raw answer.
    ///
    /// Unattended prompters answer `y`; free-text questions get no such
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn prompt_yes_no(&self, text: &str) -> Result<String> {
        self.prompt(text, None)
    }
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
