//! Travelog CLI - a personal travel log for your command line
//!
//! Records trips (destination, dates, notes, photos, location) in a local
//! JSON file and shows them as a list or as map markers.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::AppContext;
use cli::{Cli, Commands, DashboardArgs};
use errors::CliError;
use ui::print_error;

const DEFAULT_LOG_FILTER: &str = "travelog_core=warn,travelog_cli=warn";

fn main() {
    let cli = Cli::parse();
    init_tracing();
    let ctx = AppContext::new(&cli);

    if let Err(err) = run(&ctx, &cli) {
        let err = CliError::from_anyhow(err);
        let ui_ctx = ctx.ui_context(false, None);
        print_error(&ui_ctx, err.message(), err.hint());
        std::process::exit(err.exit_code());
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => commands::handle_delete(ctx, args),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(ctx, args),
        Some(Commands::Map(args)) => commands::handle_map(ctx, args),
        Some(Commands::Dashboard(args)) => commands::handle_dashboard(ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args),
        None => commands::handle_dashboard(ctx, &DashboardArgs::default()),
    }
}
