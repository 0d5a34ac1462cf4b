//! Infrastructure implementation of the `ProcessSupervisor` port.
//!
//! `TokioProcessSupervisor` spawns the child with both output streams piped
//! and drives three futures to completion together: the exit wait and one
//! line reader per stream. Nothing is returned until all three finish, so a
//! caller never sees a partially filled capture buffer.
//!
//! Detached requests skip all of that: the child gets null standard streams
//! and is reaped by a background task, so a browser forked by an opener
//! cannot hold the launcher up.

use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::application::ports::{ConsoleSink, ProcessSupervisor, RunOutcome, RunRequest};
use crate::domain::SupervisorError;

/// Separator placed between captured stdout lines.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Separator placed between captured stdout lines.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Production `ProcessSupervisor`: tokio child process plus a console sink
/// for live echo.
///
/// Each `run` owns its own capture buffer; nothing is shared between runs.
pub struct TokioProcessSupervisor<C> {
    console: C,
}

impl<C: ConsoleSink> TokioProcessSupervisor<C> {
    #[must_use]
    pub fn new(console: C) -> Self {
        Self { console }
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<C: ConsoleSink> ProcessSupervisor for TokioProcessSupervisor<C> {
    async fn run(&self, request: &RunRequest) -> Result<RunOutcome> {
        let mut command = tokio::process::Command::new(&request.program);
        command
            .args(&request.args)
            .envs(request.env.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        if let Some(dir) = &request.working_dir {
            command.current_dir(dir);
        }
        if request.detached {
            return spawn_detached(command, &request.program);
        }
        command
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| SupervisorError::Spawn {
            program: request.program.clone(),
            source,
        })?;
        self.console.reassert_title();
        tracing::debug!(
            program = %request.program,
            args = ?request.args,
            pid = child.id(),
            "spawned child process"
        );

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let mut captured: Vec<String> = Vec::new();

        let (status, stdout_read, stderr_read) = tokio::join!(
            child.wait(),
            pump_lines(stdout, |line| {
                self.console.reassert_title();
                if request.log_stdout {
                    self.console.stdout_line(&line);
                }
                captured.push(line);
            }),
            pump_lines(stderr, |line| {
                self.console.reassert_title();
                if request.log_errors {
                    self.console.stderr_line(&line);
                }
            }),
        );

        let status = status.with_context(|| format!("waiting for {}", request.program))?;
        if let Err(e) = stdout_read {
            tracing::warn!(program = %request.program, error = %e, "reading child stdout failed");
        }
        if let Err(e) = stderr_read {
            tracing::warn!(program = %request.program, error = %e, "reading child stderr failed");
        }
        tracing::debug!(
            program = %request.program,
            %status,
            lines = captured.len(),
            "child process exited"
        );

        let output = if request.capture_output {
            captured.join(LINE_SEPARATOR)
        } else {
            String::new()
        };
        Ok(RunOutcome { status, output })
    }
}

/// Start `command` with null standard streams and leave it running.
fn spawn_detached(mut command: tokio::process::Command, program: &str) -> Result<RunOutcome> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(false);
    let mut child = command.spawn().map_err(|source| SupervisorError::Spawn {
        program: program.to_string(),
        source,
    })?;
    tracing::debug!(program, pid = child.id(), "spawned detached process");

    let program = program.to_string();
    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => tracing::debug!(%program, %status, "detached process exited"),
            Err(e) => tracing::debug!(%program, error = %e, "waiting for detached process failed"),
        }
    });
    Ok(RunOutcome {
        status: ExitStatus::default(),
        output: String::new(),
    })
}

/// Feed every non-empty line of `stream` to `on_line`, decoding lossily.
async fn pump_lines<R: AsyncRead + Unpin>(
    stream: Option<R>,
    mut on_line: impl FnMut(String),
) -> std::io::Result<()> {
    let Some(stream) = stream else {
        return Ok(());
    };
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.is_empty() {
            on_line(line.to_string());
        }
    }
}
