//! Launcher - keeps a managed web app installed, configured and running

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use launcher_cli::application::ports::ProcessSupervisor as _;
use launcher_cli::application::ports::RunRequest;
use launcher_cli::cli::Cli;
use launcher_cli::domain::ToolchainError;
use launcher_cli::infra::browser;
use launcher_cli::infra::supervisor::TokioProcessSupervisor;
use launcher_cli::output::terminal::TerminalConsole;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if let Some(toolchain) = e.downcast_ref::<ToolchainError>() {
                let url = toolchain.remediation_url();
                eprintln!("Download Node.js from {url}");
                open_quietly(url).await;
            }
            ExitCode::FAILURE
        }
    }
}

/// Best-effort browser launch; failures only reach the diagnostic log.
async fn open_quietly(url: &str) {
    let supervisor = TokioProcessSupervisor::new(TerminalConsole::new("launcher"));
    let request = RunRequest::from_spec(&browser::opener(url)).detach(true);
    if let Err(e) = supervisor.run(&request).await {
        tracing::debug!(error = %format!("{e:#}"), "could not open browser");
    }
}
