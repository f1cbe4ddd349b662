//! Best-effort desktop notification after a run.
//!
//! Delivery is an external concern: we shell out to the platform notifier
//! and swallow every failure. A missing notifier, a dead session bus, or a
//! non-zero exit must never fail the run; the console summary is the source
//! of truth either way.

use std::process::Command;
use tracing::debug;

/// Attempt a desktop notification. Errors are intentionally discarded.
pub fn send(summary: &str, body: &str) {
    let result = notifier_command(summary, body).map(|mut cmd| cmd.output());
    match result {
        Some(Ok(output)) if output.status.success() => {
            debug!("desktop notification sent");
        }
        _ => debug!("desktop notification unavailable"),
    }
}

#[cfg(target_os = "macos")]
fn notifier_command(summary: &str, body: &str) -> Option<Command> {
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(format!(
        "display notification \"{}\" with title \"{}\"",
        body.replace('"', ""),
        summary.replace('"', "")
    ));
    Some(cmd)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn notifier_command(summary: &str, body: &str) -> Option<Command> {
    let mut cmd = Command::new("notify-send");
    cmd.arg(summary).arg(body);
    Some(cmd)
}

#[cfg(not(unix))]
fn notifier_command(_summary: &str, _body: &str) -> Option<Command> {
    None
}
