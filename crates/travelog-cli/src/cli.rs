use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use travelog_core::VERSION;

/// Travelog - a personal travel log for your command line
#[derive(Parser)]
#[command(name = "travelog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the travel log
    #[arg(short, long, global = true, env = "TRAVELOG_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where trips will be stored
    #[arg(value_name = "DIR")]
    pub path: Option<String>,

    /// View shown by `travelog` with no subcommand (list, map)
    #[arg(long)]
    pub view: Option<String>,

    /// Seconds an undoable delete waits before it happens
    #[arg(long)]
    pub undo_seconds: Option<u64>,

    /// Seconds a notification stays on screen
    #[arg(long)]
    pub toast_seconds: Option<u64>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Location flags shared by `add` and `edit`
#[derive(Args, Clone, Default)]
pub struct LocationArgs {
    /// Latitude in degrees (-90..90)
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees (-180..180)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Where you went (e.g. "Paris, France")
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Last day of the trip (defaults to the start date)
    #[arg(long)]
    pub end: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Attach a photo (repeatable)
    #[arg(short, long, value_name = "PATH")]
    pub image: Vec<PathBuf>,

    #[command(flatten)]
    pub location: LocationArgs,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New destination
    #[arg(long)]
    pub destination: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// New end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Replace the notes
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    /// Remove the notes
    #[arg(long)]
    pub clear_notes: bool,

    /// Attach another photo (repeatable)
    #[arg(short, long, value_name = "PATH")]
    pub image: Vec<PathBuf>,

    /// Remove the Nth photo, counting from 1 (repeatable)
    #[arg(long, value_name = "N")]
    pub remove_image: Vec<usize>,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Forget the recorded location
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub clear_location: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Delete immediately, without an undo window or prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Ask for confirmation instead of offering undo
    #[arg(long, conflicts_with = "yes")]
    pub confirm: bool,

    /// Override the undo window in seconds
    #[arg(long)]
    pub undo_seconds: Option<u64>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `map` command
#[derive(Args)]
pub struct MapArgs {
    /// Show details for one marker
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `dashboard` command
#[derive(Args, Default)]
pub struct DashboardArgs {
    /// View to open (list, map)
    #[arg(long)]
    pub view: Option<String>,

    /// Open the other view than the configured one
    #[arg(long, conflicts_with = "view")]
    pub toggle: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file
    Init(InitArgs),

    /// Record a trip
    Add(AddArgs),

    /// Edit a trip
    Edit(EditArgs),

    /// Delete a trip (undoable for a few seconds)
    Delete(DeleteArgs),

    /// List trips, most recent first
    List(ListArgs),

    /// Show one trip
    Show(ShowArgs),

    /// Show trips that have a location
    Map(MapArgs),

    /// Overview in the list or map view (default)
    Dashboard(DashboardArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
