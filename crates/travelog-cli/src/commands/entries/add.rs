use travelog_core::EntryDraft;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_coordinates, parse_date};

use super::{load_attachments, report};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);

    let start = parse_date("start", &args.start)?;
    let end = match args.end.as_deref() {
        Some(value) => parse_date("end", value)?,
        None => start,
    };
    let coordinates = parse_coordinates(&args.location)?;
    let images = load_attachments(ctx, &args.image)?;

    let mut draft = EntryDraft::new(args.destination.clone(), start, end).with_images(images);
    if let Some(notes) = &args.notes {
        draft = draft.with_notes(notes.clone());
    }
    if let Some(coordinates) = coordinates {
        draft = draft.with_coordinates(coordinates);
    }

    let mut session = ctx.open_store()?;
    let entry = session.store.add(draft)?;
    report(ctx, &ui, &session.store, &session.toasts, "Trip added", &entry);
    Ok(())
}
