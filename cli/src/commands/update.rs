//! `launcher update`: toolchain check followed by the update check.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::application::ports::{ProcessSupervisor, ProgressReporter};
use crate::application::services::install::Installer;
use crate::application::services::toolchain::check_toolchain;
use crate::application::services::update::{UpdateOutcome, UpdateRequest, check_and_maybe_update};
use crate::commands::install::install_failed;
use crate::infra::config::JsonConfigStore;
use crate::infra::fs::StdFs;

/// Run the update command.
///
/// # Errors
///
/// Returns an error if the toolchain is unusable, the installed manifest is
/// unreadable, or an accepted update fails to install.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let reporter = app.reporter();
    let supervisor = app.supervisor();
    check_toolchain(&supervisor, &reporter, app.settings.min_node_major).await?;
    let outcome = update(app, &supervisor, &reporter).await?;
    tracing::debug!(?outcome, "update finished");
    Ok(ExitCode::SUCCESS)
}

/// Install on first run or offer an update, using production adapters.
pub(crate) async fn update(
    app: &AppContext,
    supervisor: &impl ProcessSupervisor,
    reporter: &impl ProgressReporter,
) -> Result<UpdateOutcome> {
    let archives = app.archives();
    let manifests = app.manifests();
    let layout = app.layout();
    let installer = Installer {
        fs: &StdFs,
        configs: &JsonConfigStore,
        archives: &archives,
        supervisor,
        reporter,
    };
    let request = UpdateRequest {
        app_name: &app.settings.app_name,
        local_dir: &layout.app_dir,
        manifest_path: &layout.manifest_path,
        remote_manifest_url: &layout.manifest_url,
        install: layout.plan(),
    };
    check_and_maybe_update(&installer, &manifests, &app.prompter(), &request)
        .await
        .with_context(|| install_failed(app))
}
