//! `travelog init`: write the config file.

use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use travelog_core::view::ViewMode;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{
    default_data_dir, write_config, TravelogConfig, DEFAULT_TOAST_TTL_SECONDS,
    DEFAULT_UNDO_WINDOW_SECONDS,
};
use crate::errors::CliError;
use crate::helpers::parse_view;
use crate::ui::{badge, hint, print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;

    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}",
            config_path.display()
        ))
        .with_hint("Pass --force to overwrite it.")
        .into());
    }

    let interactive = ui.is_interactive() && !ctx.quiet();
    let theme = ColorfulTheme::default();

    let explicit_dir = args
        .path
        .clone()
        .or_else(|| ctx.cli().data_dir.clone())
        .map(PathBuf::from);
    let data_dir = match explicit_dir {
        Some(dir) => dir,
        None if interactive => {
            let default = default_data_dir()?;
            let value: String = Input::with_theme(&theme)
                .with_prompt("Where should trips be stored?")
                .default(default.to_string_lossy().to_string())
                .interact_text()?;
            PathBuf::from(value)
        }
        None => default_data_dir()?,
    };

    let view = match args.view.as_deref() {
        Some(value) => parse_view(value)?,
        None if interactive => {
            let choice = Select::with_theme(&theme)
                .with_prompt("Open `travelog` in which view?")
                .items(&["list", "map"])
                .default(0)
                .interact()?;
            if choice == 1 {
                ViewMode::Map
            } else {
                ViewMode::List
            }
        }
        None => ViewMode::default(),
    };

    let undo_seconds = args.undo_seconds.unwrap_or(DEFAULT_UNDO_WINDOW_SECONDS);
    let toast_seconds = args.toast_seconds.unwrap_or(DEFAULT_TOAST_TTL_SECONDS);
    if toast_seconds == 0 {
        return Err(CliError::invalid_input("--toast-seconds must be at least 1").into());
    }

    std::fs::create_dir_all(&data_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        )
    })?;

    let config = TravelogConfig::new(data_dir.clone(), view, undo_seconds, toast_seconds);
    write_config(&config_path, &config)?;
    tracing::debug!(path = %config_path.display(), "Wrote config");

    if ctx.quiet() {
        return Ok(());
    }
    let config_display = config_path.display().to_string();
    let data_display = data_dir.display().to_string();
    let undo_display = format!("{}s", undo_seconds);
    print(
        &ui,
        &receipt(
            &ui,
            "Travelog ready",
            &[
                ("Config", config_display.as_str()),
                ("Data dir", data_display.as_str()),
                ("View", view.as_str()),
                ("Undo window", undo_display.as_str()),
            ],
        ),
    );
    if undo_seconds == 0 {
        print(
            &ui,
            &badge(&ui, Badge::Warn, "Undo window is 0; deletes happen at once"),
        );
    }
    if ui.mode.is_pretty() {
        print(
            &ui,
            &hint(
                &ui,
                "travelog add \"Paris, France\" --start 2024-06-01 --end 2024-06-07",
            ),
        );
    }
    Ok(())
}
