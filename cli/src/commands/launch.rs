//! `launcher launch`: check, update, configure, then run the app.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::{ConsoleSink, ProgressReporter};
use crate::application::services::configure::ensure_config;
use crate::application::services::launch::{LaunchPlan, launch_app};
use crate::application::services::toolchain::check_toolchain;
use crate::infra::browser;
use crate::infra::config::JsonConfigStore;

/// Run the launch command.
///
/// Stays attached until the app exits; a non-zero app exit ends the launcher
/// with status 1.
///
/// # Errors
///
/// Returns an error if any step before the app starts fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let reporter = app.reporter();
    let supervisor = app.supervisor();
    supervisor.console().reassert_title();

    check_toolchain(&supervisor, &reporter, app.settings.min_node_major).await?;
    let outcome = super::update::update(app, &supervisor, &reporter).await?;
    tracing::debug!(?outcome, "update check finished");

    let layout = app.layout();
    ensure_config(
        &JsonConfigStore,
        &app.prompter(),
        &reporter,
        &layout.config_path,
        &app.default_saves_dir(),
    )?;

    let opener = app
        .settings
        .open_browser
        .then(|| browser::opener(&app.settings.app_url()));
    let plan = LaunchPlan {
        app_dir: &layout.app_dir,
        manifest_path: &layout.manifest_path,
        serve: &app.settings.commands.serve,
        host: &app.settings.host,
        port: app.settings.port,
        opener: opener.as_ref(),
    };
    let status = launch_app(&supervisor, &app.manifests(), &reporter, &plan).await?;
    if status.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        reporter.warn(&format!("{} exited with {status}", app.settings.app_name));
        Ok(ExitCode::FAILURE)
    }
}
