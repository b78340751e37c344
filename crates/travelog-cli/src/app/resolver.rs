//! Config and data directory resolution.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, TravelogConfig};

/// Config path: `TRAVELOG_CONFIG` if set, otherwise the XDG default.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TRAVELOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> anyhow::Result<TravelogConfig> {
    let path = resolve_config_path()?;
    if !path.exists() {
        return Ok(TravelogConfig::default());
    }
    read_config(&path)
}

/// Data directory: `--data-dir`/`TRAVELOG_DATA_DIR`, then config, then default.
pub fn resolve_data_dir(cli: &Cli, config: &TravelogConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.data_dir.as_deref() {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}
