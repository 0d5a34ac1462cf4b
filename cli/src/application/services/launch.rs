//! Application service: start the installed app and stay attached to it.

use std::path::Path;
use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{ManifestSource, ProcessSupervisor, ProgressReporter, RunRequest};
use crate::domain::CommandSpec;
use crate::domain::settings::{HOST_ENV, PORT_ENV};

/// How to start the app.
pub struct LaunchPlan<'a> {
    pub app_dir: &'a Path,
    pub manifest_path: &'a Path,
    pub serve: &'a CommandSpec,
    pub host: &'a str,
    pub port: u16,
    /// Command that opens the app URL in a browser, if wanted.
    pub opener: Option<&'a CommandSpec>,
}

/// Run the app in the foreground with `HOST`/`PORT` injected.
///
/// Both output streams are echoed live and nothing is captured. Returns once
/// the app exits.
///
/// # Errors
///
/// Returns an error if the installed manifest is unreadable or the app
/// cannot be spawned.
pub async fn launch_app(
    supervisor: &impl ProcessSupervisor,
    manifests: &impl ManifestSource,
    reporter: &impl ProgressReporter,
    plan: &LaunchPlan<'_>,
) -> Result<ExitStatus> {
    let active = manifests
        .read_local(plan.manifest_path)
        .context("reading installed manifest")?;
    reporter.step(&format!("Starting local web app ({}) ...", active.version));

    if let Some(opener) = plan.opener {
        open_best_effort(supervisor, reporter, opener).await;
    }

    let port = plan.port.to_string();
    let request = RunRequest::from_spec(plan.serve)
        .current_dir(plan.app_dir)
        .log_stdout(true)
        .log_errors(true)
        .env(HOST_ENV, plan.host)
        .env(PORT_ENV, &port);
    let outcome = supervisor
        .run(&request)
        .await
        .with_context(|| format!("starting `{}`", plan.serve.display()))?;
    tracing::info!(status = %outcome.status, "app exited");
    Ok(outcome.status)
}

/// Start a URL opener detached, downgrading a spawn failure to a warning.
///
/// The opener is never waited on: `xdg-open` may run the browser in the
/// foreground, and the app must start regardless.
pub async fn open_best_effort(
    supervisor: &impl ProcessSupervisor,
    reporter: &impl ProgressReporter,
    opener: &CommandSpec,
) {
    let request = RunRequest::from_spec(opener).detach(true);
    if let Err(e) = supervisor.run(&request).await {
        reporter.warn(&format!("Could not open a browser: {e:#}"));
    }
}
