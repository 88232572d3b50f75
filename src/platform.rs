//! Platform-specific URL opening
//!
//! The redirect and escalation effects leave the terminal entirely, so
//! they are handed to the operating system's default opener.

use std::process::Command;

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Open a URL in the default browser. Failure to spawn the opener is
/// logged and otherwise ignored; the URL stays visible on screen so the
/// user can follow it by hand.
pub fn open_url(url: &str) {
    if let Err(err) = opener(url).spawn() {
        tracing::warn!(url, error = %err, "could not open URL in browser");
    }
}
