//! Application service: verify the Node.js toolchain before anything else.

use anyhow::Result;

use crate::application::ports::{ProcessSupervisor, ProgressReporter, RunRequest};
use crate::domain::settings::npm_program;
use crate::domain::toolchain::{self, ToolchainReport};

/// Probe `node` and `npm` and check the Node.js major version.
///
/// A probe that cannot be spawned counts as empty output, which is then
/// reported exactly like unparseable output.
///
/// # Errors
///
/// Returns a `ToolchainError` if either tool is missing or Node.js is older
/// than `min_major`.
pub async fn check_toolchain(
    supervisor: &impl ProcessSupervisor,
    reporter: &impl ProgressReporter,
    min_major: u64,
) -> Result<ToolchainReport> {
    let node = probe(supervisor, "node").await;
    let npm = probe(supervisor, npm_program()).await;
    let report = toolchain::evaluate(&node, &npm, min_major)?;
    reporter.success(&format!(
        "All dependencies checked! node: {}, npm: {}",
        report.node_version, report.npm_version
    ));
    Ok(report)
}

async fn probe(supervisor: &impl ProcessSupervisor, program: &str) -> String {
    let request = RunRequest::new(program)
        .args(["--version"])
        .capture(true)
        .log_errors(false);
    match supervisor.run(&request).await {
        Ok(outcome) => outcome.output,
        Err(e) => {
            tracing::debug!(program, error = %format!("{e:#}"), "toolchain probe failed");
            String::new()
        }
    }
}
