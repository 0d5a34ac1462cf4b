//! `TerminalConsole`: echoes supervised child output to the operator.

use std::sync::{Mutex, PoisonError};

use console::Term;

use crate::application::ports::ConsoleSink;

/// Console sink writing child lines to the launcher's own stdout/stderr.
///
/// Both stream readers call in concurrently; a mutex keeps their lines and
/// title escapes from interleaving mid-line.
pub struct TerminalConsole {
    title: String,
    is_tty: bool,
    lock: Mutex<()>,
}

impl TerminalConsole {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_tty: Term::stdout().is_term(),
            lock: Mutex::new(()),
        }
    }
}

impl ConsoleSink for TerminalConsole {
    fn stdout_line(&self, line: &str) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        println!("{line}");
    }

    fn stderr_line(&self, line: &str) {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        eprintln!("{line}");
    }

    fn reassert_title(&self) {
        if !self.is_tty {
            return;
        }
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Term::stdout().set_title(&self.title);
    }
}
