//! `travelog` with no subcommand: headline plus the list or map view.

use travelog_core::map::MapSurface;
use travelog_core::view::{ViewMode, ViewSelector};

use crate::app::AppContext;
use crate::cli::DashboardArgs;
use crate::helpers::{check_format, parse_view};
use crate::output::entry_table;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, header, hint, kv, print, Badge};

use super::map::render_map;

pub fn handle_dashboard(ctx: &AppContext, args: &DashboardArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui = ctx.ui_context(false, args.format.as_deref());

    let mut selector = ViewSelector::new(ctx.config()?.ui.default_view);
    if let Some(view) = args.view.as_deref() {
        selector.set(parse_view(view)?);
    } else if args.toggle {
        selector.toggle();
    }

    let session = ctx.open_store()?;
    let entries = session.store.list();
    let quiet = ctx.quiet();

    if ui.mode.is_pretty() && !quiet {
        let context = format!("{} view", selector.mode());
        print(&ui, &header(&ui, "dashboard", Some(context.as_str())));
        print(
            &ui,
            &styled(&session.store.summary(), styles::dim(), ui.color),
        );
        print(
            &ui,
            &kv(&ui, "Data", &session.data_dir.display().to_string()),
        );
        blank_line(&ui);
    } else if !ui.mode.is_pretty() {
        print(&ui, &format!("view={}", selector.mode()));
        print(&ui, &format!("entries={}", entries.len()));
    }

    match selector.mode() {
        ViewMode::List => {
            if entries.is_empty() {
                if ui.mode.is_pretty() && !quiet {
                    print(&ui, &badge(&ui, Badge::Info, "No trips yet."));
                    print(
                        &ui,
                        &hint(&ui, "travelog add \"Paris, France\" --start 2024-06-01"),
                    );
                }
                return Ok(());
            }
            print(&ui, &entry_table(&ui, &entries));
            if ui.mode.is_pretty() && !quiet {
                blank_line(&ui);
                print(&ui, &hint(&ui, "travelog dashboard --toggle"));
            }
        }
        ViewMode::Map => render_map(&ui, true, &entries, &MapSurface::new()),
    }
    Ok(())
}
