//! Platform command that opens a URL in the default browser.

use crate::domain::CommandSpec;

/// Command that hands `url` to the desktop's default handler.
#[must_use]
pub fn opener(url: &str) -> CommandSpec {
    if cfg!(windows) {
        // `start` treats the first quoted argument as a window title.
        CommandSpec::new("cmd", &["/C", "start", "", url])
    } else if cfg!(target_os = "macos") {
        CommandSpec::new("open", &[url])
    } else {
        CommandSpec::new("xdg-open", &[url])
    }
}
