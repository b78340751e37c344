use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::check_format;
use crate::output::{entries_json, entry_table};
use crate::ui::{badge, blank_line, header, hint, print, Badge};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    check_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, args.format.as_deref());
    let session = ctx.open_store()?;
    let entries = session.store.list();

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries)?)?);
        return Ok(());
    }

    if entries.is_empty() {
        if ui.mode.is_pretty() && !ctx.quiet() {
            print(&ui, &badge(&ui, Badge::Info, &session.store.summary()));
            print(
                &ui,
                &hint(&ui, "travelog add \"Paris, France\" --start 2024-06-01"),
            );
        }
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        let count = match entries.len() {
            1 => "1 trip".to_string(),
            n => format!("{} trips", n),
        };
        print(&ui, &header(&ui, "list", Some(count.as_str())));
        blank_line(&ui);
    }
    print(&ui, &entry_table(&ui, &entries));
    Ok(())
}
