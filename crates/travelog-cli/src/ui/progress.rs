//! Countdown shown while a deletion can still be undone.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::context::UiContext;
use super::render::badge;
use super::theme::Badge;

/// Draining bar for the undo window. Falls back to a single line when the
/// terminal cannot animate.
pub struct Countdown<'a> {
    ctx: &'a UiContext,
    bar: Option<ProgressBar>,
    window: Duration,
}

impl<'a> Countdown<'a> {
    pub fn new(ctx: &'a UiContext, window: Duration, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let pb = ProgressBar::new(window.as_millis() as u64);
            let template = if ctx.unicode {
                "{msg} [{bar:20.red/dim}] {prefix}"
            } else {
                "{msg} [{bar:20}] {prefix}"
            };
            let style = ProgressStyle::default_bar()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars(if ctx.unicode { "━━─" } else { "=>-" });
            pb.set_style(style);
            pb.set_message(message.to_string());
            pb.set_position(pb.length().unwrap_or(0));
            Some(pb)
        } else {
            None
        };

        Self { ctx, bar, window }
    }

    pub fn start(&self) {
        if self.bar.is_some() {
            self.set_remaining(self.window);
        } else if !self.ctx.mode.is_json() {
            let message = format!(
                "Deleting in {}s. Press Enter to undo.",
                self.window.as_secs()
            );
            println!("{}", badge(self.ctx, Badge::Warn, &message));
        }
    }

    /// Redraw with `remaining` time left in the window.
    pub fn set_remaining(&self, remaining: Duration) {
        if let Some(bar) = &self.bar {
            let remaining = remaining.min(self.window);
            bar.set_position(remaining.as_millis() as u64);
            bar.set_prefix(format!(
                "{}s left, Enter to undo",
                remaining.as_secs_f64().ceil() as u64
            ));
        }
    }

    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Countdown<'_> {
    fn drop(&mut self) {
        self.clear();
    }
}
