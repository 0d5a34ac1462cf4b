//! Application service: replace the app directory with the latest archive.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{
    ArchiveSource, ConfigStore, LocalFs, ProcessSupervisor, ProgressReporter, RunRequest,
};
use crate::domain::{CommandSpec, InstallError};

// ── Public types ──────────────────────────────────────────────────────────────

/// Where the archive comes from and where the app ends up.
pub struct InstallPlan<'a> {
    pub archive_url: &'a str,
    /// Local download target; removed once unpacked.
    pub archive_path: &'a Path,
    /// App directory; must be the archive's top-level directory.
    pub target_dir: &'a Path,
    /// Config file inside `target_dir` carried over across reinstalls.
    pub config_path: &'a Path,
    /// Dependency and build commands, run in order inside `target_dir`.
    pub build_steps: &'a [CommandSpec],
}

/// What happened during a successful install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutcome {
    /// A previous config was written back into the new directory.
    pub config_restored: bool,
    /// Build steps that failed to spawn or exited non-zero.
    pub failed_steps: Vec<String>,
}

/// Port bundle for the install use-case.
pub struct Installer<'a, F, C, A, S, R> {
    pub fs: &'a F,
    pub configs: &'a C,
    pub archives: &'a A,
    pub supervisor: &'a S,
    pub reporter: &'a R,
}

// ── Install service ───────────────────────────────────────────────────────────

impl<F, C, A, S, R> Installer<'_, F, C, A, S, R>
where
    F: LocalFs,
    C: ConfigStore,
    A: ArchiveSource,
    S: ProcessSupervisor,
    R: ProgressReporter,
{
    /// Download the branch archive and install it, preserving the config.
    ///
    /// The config backup is taken strictly before the old directory is
    /// deleted and restored strictly after the new one exists. A crash in
    /// between loses the config.
    ///
    /// Build step failures are reported in the outcome but never abort.
    ///
    /// # Errors
    ///
    /// Returns an `InstallError` (network, extract or I/O) for any failure
    /// before the build steps. These are fatal to the caller.
    pub async fn install_latest(&self, plan: &InstallPlan<'_>) -> Result<InstallOutcome> {
        let reporter = self.reporter;
        reporter.step("Beginning installation...");

        if self.fs.exists(plan.archive_path) {
            reporter.step("Removing previous package...");
            self.fs
                .remove_file(plan.archive_path)
                .map_err(InstallError::io("removing stale archive", plan.archive_path))?;
        }

        let backup = if self.fs.exists(plan.target_dir) {
            reporter.step("Cleaning current installation...");
            let backup = if self.configs.exists(plan.config_path) {
                reporter.step("Backing up configuration...");
                self.configs
                    .backup(plan.config_path)
                    .context("backing up configuration")?
            } else {
                None
            };
            reporter.step("Removing old installation...");
            self.fs
                .remove_dir_all(plan.target_dir)
                .map_err(InstallError::io("removing old installation", plan.target_dir))?;
            backup
        } else {
            None
        };

        reporter.step("Downloading package. This may take a minute...");
        let bytes = self.archives.download(plan.archive_url, plan.archive_path)?;
        tracing::debug!(url = plan.archive_url, bytes, "archive downloaded");

        reporter.step("Unpacking package...");
        let parent = plan
            .target_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        self.archives.extract(plan.archive_path, parent)?;
        if !self.fs.exists(plan.target_dir) {
            return Err(InstallError::Extract {
                archive: plan.archive_path.to_path_buf(),
                reason: format!("archive did not contain {}", plan.target_dir.display()),
            }
            .into());
        }

        reporter.step("Cleaning directory...");
        self.fs
            .remove_file(plan.archive_path)
            .map_err(InstallError::io("removing downloaded archive", plan.archive_path))?;

        let config_restored = match &backup {
            Some(backup) => {
                reporter.step("Restoring configuration...");
                self.configs
                    .restore(plan.config_path, backup)
                    .context("restoring configuration")?;
                true
            }
            None => false,
        };

        reporter.step("Installing dependencies...");
        let failed_steps = self.run_build_steps(plan).await;

        reporter.success("Installation complete!");
        Ok(InstallOutcome {
            config_restored,
            failed_steps,
        })
    }

    async fn run_build_steps(&self, plan: &InstallPlan<'_>) -> Vec<String> {
        let mut failed = Vec::new();
        for step in plan.build_steps {
            let request = RunRequest::from_spec(step).current_dir(plan.target_dir);
            match self.supervisor.run(&request).await {
                Ok(outcome) if outcome.status.success() => {
                    tracing::debug!(command = %step.display(), "build step finished");
                }
                Ok(outcome) => {
                    self.reporter.warn(&format!(
                        "`{}` exited with {}",
                        step.display(),
                        outcome.status
                    ));
                    failed.push(step.display());
                }
                Err(e) => {
                    self.reporter
                        .warn(&format!("`{}` could not be run: {e:#}", step.display()));
                    failed.push(step.display());
                }
            }
        }
        failed
    }
}
