/// Spinner shown on stderr while a request is in flight.
use std::borrow::Cow;
use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(80);

/// A spinner that only draws when enabled and stderr is a terminal.
///
/// Finish it with [`Progress::succeed`] or [`Progress::fail`] before writing
/// the command's output.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn start(message: impl Into<Cow<'static, str>>, enabled: bool) -> Self {
        if !enabled || !std::io::stderr().is_terminal() {
            return Self::hidden();
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message);
        bar.enable_steady_tick(TICK);
        Self { bar: Some(bar) }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn succeed(self, message: &str) {
        if let Some(bar) = self.bar {
            bar.finish_with_message(format!("✔ {message}"));
        }
    }

    pub fn fail(self, message: &str) {
        if let Some(bar) = self.bar {
            bar.abandon_with_message(format!("✖ {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_progress_draws_nothing() {
        let progress = Progress::start("Fetching messages...", false);
        assert!(progress.bar.is_none());
        progress.succeed("Messages retrieved");
    }

    #[test]
    fn hidden_progress_can_fail_quietly() {
        Progress::hidden().fail("Failed to fetch messages");
    }
}
