//! `launcher install`: unconditional reinstall of the tracked branch.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::{ArchiveSource, ProcessSupervisor, ProgressReporter};
use crate::application::services::install::{InstallOutcome, InstallPlan, Installer};
use crate::infra::config::JsonConfigStore;
use crate::infra::fs::StdFs;

/// Run the install command.
///
/// # Errors
///
/// Returns an error if download, extraction or file replacement fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let reporter = app.reporter();
    let supervisor = app.supervisor();
    let archives = app.archives();
    let layout = app.layout();
    let installer = Installer {
        fs: &StdFs,
        configs: &JsonConfigStore,
        archives: &archives,
        supervisor: &supervisor,
        reporter: &reporter,
    };
    let outcome = install(app, &installer, &layout.plan()).await?;
    Ok(if outcome.failed_steps.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Install and attach the project page as remediation on failure.
pub(crate) async fn install<A, S, R>(
    app: &AppContext,
    installer: &Installer<'_, StdFs, JsonConfigStore, A, S, R>,
    plan: &InstallPlan<'_>,
) -> Result<InstallOutcome>
where
    A: ArchiveSource,
    S: ProcessSupervisor,
    R: ProgressReporter,
{
    installer
        .install_latest(plan)
        .await
        .with_context(|| install_failed(app))
}

/// Context line for a failed install or update.
pub(crate) fn install_failed(app: &AppContext) -> String {
    format!(
        "could not install {}. If the problem persists, get help at {}",
        app.settings.app_name,
        app.settings.project_url()
    )
}
