//! Terminal rendering for store notifications.

use chrono::{DateTime, Utc};

use travelog_core::notify::{Toast, ToastCenter, ToastVariant};

use super::context::UiContext;
use super::render::badge;
use super::theme::{styled, styles, Badge};

pub fn render_toast(ctx: &UiContext, toast: &Toast) -> String {
    let kind = match toast.message.variant {
        ToastVariant::Default => Badge::Info,
        ToastVariant::Destructive => Badge::Warn,
    };
    let title = styled(&toast.message.title, styles::bold(), ctx.color);
    let description = styled(&toast.message.description, styles::dim(), ctx.color);
    format!("{}\n    {}", badge(ctx, kind, &title), description)
}

/// Present pending toasts once on stderr. Only pretty mode shows them;
/// every other mode drops them so stdout and stderr stay parseable.
pub fn flush(ctx: &UiContext, center: &ToastCenter, quiet: bool) {
    flush_at(ctx, center, quiet, Utc::now());
}

fn flush_at(ctx: &UiContext, center: &ToastCenter, quiet: bool, now: DateTime<Utc>) {
    let shown = center.present(now);
    if ctx.mode.is_pretty() && !quiet {
        for toast in &shown {
            eprintln!("{}", render_toast(ctx, toast));
        }
    }
    // Presented toasts are retired before exit.
    for toast in shown {
        center.dismiss(toast.id);
    }
}
