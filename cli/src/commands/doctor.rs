//! `launcher doctor`: toolchain and installation diagnostics.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::ports::{ConfigStore, ManifestSource};
use crate::application::services::toolchain::check_toolchain;
use crate::infra::config::JsonConfigStore;

/// Run the doctor command. Reads only; never installs or prompts.
///
/// # Errors
///
/// This function currently always succeeds; problems are reported through
/// the exit code.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let mut issues = 0usize;
    let reporter = app.reporter();
    let supervisor = app.supervisor();
    let manifests = app.manifests();
    let layout = app.layout();

    app.output.header("Toolchain");
    match check_toolchain(&supervisor, &reporter, app.settings.min_node_major).await {
        Ok(report) => {
            app.output.kv("node:", &report.node_version);
            app.output.kv("npm: ", &report.npm_version);
        }
        Err(e) => {
            issues += 1;
            app.output.error(&format!("{e:#}"));
        }
    }

    app.output.header("Installation");
    app.output
        .kv("directory:", &layout.app_dir.display().to_string());
    match manifests.read_local(&layout.manifest_path) {
        Ok(local) => app.output.kv("installed:", &local.version),
        Err(e) => {
            issues += 1;
            app.output.error(&format!("not installed: {e:#}"));
        }
    }
    match manifests.read_remote(&layout.manifest_url) {
        Ok(remote) => app.output.kv("latest:   ", &remote.version),
        Err(e) => app.output.kv("latest:   ", &format!("unknown ({e:#})")),
    }

    app.output.header("Configuration");
    let store = JsonConfigStore;
    if !store.exists(&layout.config_path) {
        app.output.kv(
            "config:",
            &format!("missing ({})", layout.config_path.display()),
        );
    } else if let Err(e) = store.read(&layout.config_path) {
        issues += 1;
        app.output.error(&format!("{e:#}"));
    } else {
        app.output
            .kv("config:", &layout.config_path.display().to_string());
    }

    if issues == 0 {
        app.output.success("No problems found.");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
