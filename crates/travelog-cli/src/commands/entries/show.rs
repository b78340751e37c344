use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::{entry_detail, entry_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let session = ctx.open_store()?;

    let id = session.store.resolve_id(&args.id)?;
    let entry = session
        .store
        .get(&id)
        .ok_or_else(|| CliError::not_found("Entry not found", "Run `travelog list`."))?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry, true)?)?);
        return Ok(());
    }

    for line in entry_detail(&ui, entry) {
        println!("{}", line);
    }
    Ok(())
}
