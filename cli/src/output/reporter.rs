//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// Every line carries a local `[HH:MM]` timestamp.
///
/// - `step()` prints `"[HH:MM] → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"[HH:MM] ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"[HH:MM] ! {message}"` to stderr (never suppressed)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    fn stamp(&self) -> String {
        timestamp(chrono::Local::now())
            .style(self.ctx.styles.dim)
            .to_string()
    }
}

/// `[HH:MM]` prefix for operator log lines.
#[must_use]
pub fn timestamp<Tz: chrono::TimeZone>(at: chrono::DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("[{}]", at.format("%H:%M"))
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("{} {} {message}", self.stamp(), "→".style(self.ctx.styles.step));
        }
    }

    fn success(&self, message: &str) {
        if !self.ctx.quiet {
            println!(
                "{} {} {message}",
                self.stamp(),
                "✓".style(self.ctx.styles.success)
            );
        }
    }

    fn warn(&self, message: &str) {
        eprintln!(
            "{} {} {message}",
            self.stamp(),
            "!".style(self.ctx.styles.warning)
        );
    }
}
