//! `travelog map`: trips that can be pinned on a map.

use travelog_core::map::{markers, MapSurface, DEFAULT_CENTER, DEFAULT_ZOOM};
use travelog_core::TravelEntry;

use crate::app::AppContext;
use crate::cli::MapArgs;
use crate::errors::CliError;
use crate::helpers::check_format;
use crate::output::{map_json, marker_popup, marker_table};
use crate::ui::{badge, blank_line, header, hint, kv, print, Badge, UiContext};

pub fn handle_map(ctx: &AppContext, args: &MapArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());
    let session = ctx.open_store()?;
    let entries = session.store.list();

    let mut surface = MapSurface::new();
    if let Some(value) = args.select.as_deref() {
        let id = session.store.resolve_id(value)?;
        surface.select(id);
    }
    if surface.selected().is_some() && surface.selected_entry(&entries).is_none() {
        return Err(CliError::invalid_input("That trip has no location to show")
            .with_hint("Set one with `travelog edit <ID> --lat <LAT> --lng <LNG>`.")
            .into());
    }

    if ui.mode.is_json() {
        let value = map_json(&markers(&entries), surface.selected_entry(&entries))?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    render_map(&ui, ctx.quiet(), &entries, &surface);
    Ok(())
}

/// Marker table plus the popup for the selected marker.
pub(super) fn render_map(
    ui: &UiContext,
    quiet: bool,
    entries: &[TravelEntry],
    surface: &MapSurface,
) {
    let pins = markers(entries);

    if ui.mode.is_pretty() && !quiet {
        let context = match pins.len() {
            1 => "1 pinned".to_string(),
            n => format!("{} pinned", n),
        };
        print(ui, &header(ui, "map", Some(context.as_str())));
        print(
            ui,
            &kv(
                ui,
                "Center",
                &format!(
                    "{}, {} (zoom {})",
                    DEFAULT_CENTER.lat, DEFAULT_CENTER.lng, DEFAULT_ZOOM
                ),
            ),
        );
        blank_line(ui);
    }

    if pins.is_empty() {
        if ui.mode.is_pretty() && !quiet {
            print(ui, &badge(ui, Badge::Info, "No trips with a location yet."));
            print(
                ui,
                &hint(ui, "travelog edit <ID> --lat 48.8566 --lng 2.3522"),
            );
        }
        return;
    }

    print(ui, &marker_table(ui, &pins));

    if let Some(entry) = surface.selected_entry(entries) {
        blank_line(ui);
        for line in marker_popup(ui, entry) {
            println!("{}", line);
        }
    } else if ui.mode.is_pretty() && !quiet {
        blank_line(ui);
        print(ui, &hint(ui, "travelog map --select <ID>"));
    }
}
