//! Application context for the Travelog CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config and knows how to
//! open the entry store for a command.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use once_cell::unsync::OnceCell;

use travelog_core::notify::ToastCenter;
use travelog_core::storage::FileMirror;
use travelog_core::EntryStore;

use crate::cli::Cli;
use crate::config::TravelogConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_dir};

/// An opened travel log: the store plus the toasts it reports to.
pub struct Session {
    pub store: EntryStore,
    pub toasts: Arc<ToastCenter>,
    pub data_dir: PathBuf,
}

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TravelogConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&TravelogConfig> {
        self.config.get_or_try_init(load_config)
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Undo window for deferred deletes.
    pub fn undo_window(&self) -> anyhow::Result<Duration> {
        Ok(Duration::from_secs(self.config()?.ui.undo_window_seconds))
    }

    /// Build a UI context honoring the global color/ascii flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    /// Load the store from the data directory and attach a toast center.
    pub fn open_store(&self) -> anyhow::Result<Session> {
        let data_dir = self.data_dir()?;
        let ttl_secs = self.config()?.ui.toast_ttl_seconds;
        let ttl = chrono::Duration::seconds(ttl_secs.min(86_400) as i64);

        let mut store = EntryStore::load(FileMirror::in_dir(&data_dir));
        let toasts = Arc::new(ToastCenter::new(ttl));
        store.subscribe(Arc::clone(&toasts));

        Ok(Session {
            store,
            toasts,
            data_dir,
        })
    }

    /// Single-threaded runtime for commands that wait on timers or file reads.
    pub fn runtime(&self) -> anyhow::Result<tokio::runtime::Runtime> {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to start async runtime: {}", e))
    }
}
