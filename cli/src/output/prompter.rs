//! `TerminalPrompter`: line input from the operator via dialoguer.

use anyhow::{Context, Result, bail};

use crate::application::ports::Prompter;
use crate::domain::prompt::resolve_answer;

/// Answer given to yes/no questions when prompting is disabled.
const NON_INTERACTIVE_ANSWER: &str = "y";

/// Reads answers from the terminal.
///
/// With `non_interactive` set (CI, `--yes`, `LAUNCHER_YES`), yes/no questions
/// are answered `y` and every other question takes its default. A question
/// without a default is an error.
pub struct TerminalPrompter {
    non_interactive: bool,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new(non_interactive: bool) -> Self {
        Self { non_interactive }
    }
}

impl Prompter for TerminalPrompter {
    fn prompt(&self, text: &str, default: Option<&str>) -> Result<String> {
        if self.non_interactive {
            let Some(answer) = default else {
                bail!(
                    "`{}` has no default and prompting is disabled; run interactively or use `launcher config set`",
                    text.trim_end_matches(':')
                );
            };
            tracing::debug!(question = text, answer, "answered without prompting");
            return Ok(answer.to_string());
        }
        let mut input = dialoguer::Input::<String>::new()
            .with_prompt(text)
            .allow_empty(true);
        if let Some(d) = default {
            input = input.default(d.to_string()).show_default(true);
        }
        let raw = input.interact_text().context("cannot read answer")?;
        Ok(resolve_answer(&raw, default))
    }

    fn prompt_yes_no(&self, text: &str) -> Result<String> {
        if self.non_interactive {
            tracing::debug!(question = text, answer = NON_INTERACTIVE_ANSWER, "answered without prompting");
            return Ok(NON_INTERACTIVE_ANSWER.to_string());
        }
        self.prompt(text, None)
    }
}
