//! Command handlers, one module per subcommand group.

mod dashboard;
mod entries;
mod init;
mod map;
mod misc;

pub use dashboard::handle_dashboard;
pub use entries::{handle_add, handle_delete, handle_edit, handle_list, handle_show};
pub use init::handle_init;
pub use map::handle_map;
pub use misc::handle_completions;
