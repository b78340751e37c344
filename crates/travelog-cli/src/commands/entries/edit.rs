use travelog_core::{EntryDraft, TravelEntry};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_coordinates, parse_date};

use super::{load_attachments, report};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let mut session = ctx.open_store()?;

    let id = session.store.resolve_id(&args.id)?;
    let current = session
        .store
        .get(&id)
        .cloned()
        .ok_or_else(|| CliError::not_found("Entry not found", "Run `travelog list`."))?;

    let new_images = load_attachments(ctx, &args.image)?;
    let draft = apply_edits(current.to_draft(), args, new_images)?;
    if draft == current.to_draft() {
        return Err(CliError::invalid_input("Nothing to change")
            .with_hint("Pass --destination, --start, --end, --notes, --image or --lat/--lng.")
            .into());
    }

    let mut edited: TravelEntry = current;
    edited.apply_draft(draft);
    let entry = session.store.update(edited)?;
    report(ctx, &ui, &session.store, &session.toasts, "Trip updated", &entry);
    Ok(())
}

fn apply_edits(
    mut draft: EntryDraft,
    args: &EditArgs,
    new_images: Vec<String>,
) -> anyhow::Result<EntryDraft> {
    if let Some(destination) = &args.destination {
        draft.destination = destination.clone();
    }
    if let Some(start) = args.start.as_deref() {
        draft.start_date = parse_date("start", start)?;
    }
    if let Some(end) = args.end.as_deref() {
        draft.end_date = parse_date("end", end)?;
    }

    if args.clear_notes {
        draft.notes = None;
    } else if let Some(notes) = &args.notes {
        draft.notes = Some(notes.clone());
    }

    // 1-based, removed highest first so earlier positions stay valid
    let mut removals = args.remove_image.clone();
    removals.sort_unstable();
    removals.dedup();
    for &position in removals.iter().rev() {
        if position == 0 || position > draft.images.len() {
            return Err(CliError::invalid_input(format!(
                "No photo #{} (trip has {})",
                position,
                draft.images.len()
            ))
            .into());
        }
        draft = draft.without_image(position - 1);
    }
    for image in new_images {
        draft = draft.with_image(image);
    }

    if args.clear_location {
        draft.coordinates = None;
    } else if let Some(coordinates) = parse_coordinates(&args.location)? {
        draft = draft.with_coordinates(coordinates);
    }

    Ok(draft)
}
