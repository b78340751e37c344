//! Trip commands: add, edit, delete, list, show.

mod add;
mod delete;
mod edit;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;

use std::path::PathBuf;

use travelog_core::images::load_images;
use travelog_core::notify::ToastCenter;
use travelog_core::{EntryStore, TravelEntry};

use crate::app::AppContext;
use crate::ui::format::format_date_range;
use crate::ui::{badge, print, receipt, toast, Badge, UiContext};

/// Read photo files concurrently into data URIs.
fn load_attachments(ctx: &AppContext, paths: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }
    let runtime = ctx.runtime()?;
    Ok(runtime.block_on(load_images(paths))?)
}

/// Surface a mirror write failure the store swallowed.
fn warn_if_unsaved(ui: &UiContext, store: &EntryStore) {
    if let Some(err) = store.last_persist_error() {
        eprintln!(
            "{}",
            badge(ui, Badge::Warn, &format!("Changes were not saved: {}", err))
        );
    }
}

/// Receipt plus any toasts the mutation raised.
fn report(
    ctx: &AppContext,
    ui: &UiContext,
    store: &EntryStore,
    toasts: &ToastCenter,
    title: &str,
    entry: &TravelEntry,
) {
    warn_if_unsaved(ui, store);
    if ctx.quiet() {
        return;
    }
    let dates = format_date_range(entry.start_date, entry.end_date);
    print(
        ui,
        &receipt(
            ui,
            title,
            &[
                ("Entry ID", entry.id.as_str()),
                ("Destination", entry.destination.as_str()),
                ("Dates", dates.as_str()),
            ],
        ),
    );
    toast::flush(ui, toasts, ctx.quiet());
}
