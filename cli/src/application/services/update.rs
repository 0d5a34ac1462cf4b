//! Application service: decide whether the installed app needs replacing.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! ```text
//! NoInstall ──install──▶ Installed
//! Installed ──differs, accept──▶ Reinstalled
//! Installed ──differs, decline──▶ Installed
//! Installed ──remote check fails──▶ Installed
//! ```

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::{
    ArchiveSource, ConfigStore, LocalFs, ManifestSource, ProcessSupervisor, ProgressReporter,
    Prompter,
};
use crate::application::services::install::{InstallOutcome, InstallPlan, Installer};
use crate::domain::prompt::parse_yes_no;

// ── Public types ──────────────────────────────────────────────────────────────

/// Inputs to one update check.
pub struct UpdateRequest<'a> {
    /// Used in the operator prompt.
    pub app_name: &'a str,
    pub local_dir: &'a Path,
    pub manifest_path: &'a Path,
    pub remote_manifest_url: &'a str,
    pub install: InstallPlan<'a>,
}

/// Result of an update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing was installed, so the latest archive was installed.
    Installed(InstallOutcome),
    /// Versions differed and the operator accepted the update.
    Reinstalled {
        from: String,
        to: String,
        install: InstallOutcome,
    },
    /// Versions differed and the operator kept the current install.
    Declined { local: String, remote: String },
    /// Local and remote versions are equal.
    UpToDate { version: String },
    /// The remote manifest could not be fetched; the install is unchanged.
    CheckFailed { local: String },
}

// ── Update service ────────────────────────────────────────────────────────────

/// Install on first run, otherwise offer an update when versions differ.
///
/// The remote check is best-effort: a fetch failure is logged and the
/// existing installation is kept.
///
/// # Errors
///
/// Returns an error if the local manifest cannot be read, the operator's
/// answer cannot be read, or an install that was started fails.
pub async fn check_and_maybe_update<F, C, A, S, R>(
    installer: &Installer<'_, F, C, A, S, R>,
    manifests: &impl ManifestSource,
    prompter: &impl Prompter,
    request: &UpdateRequest<'_>,
) -> Result<UpdateOutcome>
where
    F: LocalFs,
    C: ConfigStore,
    A: ArchiveSource,
    S: ProcessSupervisor,
    R: ProgressReporter,
{
    let reporter = installer.reporter;

    if !installer.fs.exists(request.local_dir) {
        reporter.step("Could not find package.");
        let outcome = installer.install_latest(&request.install).await?;
        return Ok(UpdateOutcome::Installed(outcome));
    }

    let local = manifests
        .read_local(request.manifest_path)
        .context("reading installed manifest (run `launcher install` to repair)")?;

    reporter.step("Checking for updates...");
    let remote = match manifests.read_remote(request.remote_manifest_url) {
        Ok(remote) => remote,
        Err(e) => {
            tracing::warn!(url = request.remote_manifest_url, error = %format!("{e:#}"), "update check failed");
            reporter.warn(&format!(
                "Could not fetch remote package to check for updates: {e:#}"
            ));
            return Ok(UpdateOutcome::CheckFailed {
                local: local.version,
            });
        }
    };

    if !local.differs_from(&remote) {
        reporter.success("Up to date!");
        return Ok(UpdateOutcome::UpToDate {
            version: local.version,
        });
    }

    let question = format!(
        "An update is available for {} ({}). Would you like to install it? (Y/N)",
        request.app_name, remote.version
    );
    if ask_yes_no(prompter, reporter, &question)? {
        let install = installer.install_latest(&request.install).await?;
        Ok(UpdateOutcome::Reinstalled {
            from: local.version,
            to: remote.version,
            install,
        })
    } else {
        reporter.step("Installation bypassed.");
        Ok(UpdateOutcome::Declined {
            local: local.version,
            remote: remote.version,
        })
    }
}

/// Ask until the answer starts with `y` or `n` (any case).
///
/// # Errors
///
/// Returns an error if the prompter fails, e.g. on end of input.
pub fn ask_yes_no(
    prompter: &impl Prompter,
    reporter: &impl ProgressReporter,
    question: &str,
) -> Result<bool> {
    let mut text = question.to_string();
    loop {
        let answer = prompter.prompt_yes_no(&text)?;
        if let Some(yes) = parse_yes_no(&answer) {
            return Ok(yes);
        }
        reporter.warn("Please enter Y for yes, or N for no.");
        text = "(Y/N)".to_string();
    }
}
