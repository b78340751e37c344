use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use travelog_core::view::ViewMode;

pub const DEFAULT_UNDO_WINDOW_SECONDS: u64 = 4;
pub const DEFAULT_TOAST_TTL_SECONDS: u64 = 5;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TravelogConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub data_dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default = "default_undo_window")]
    pub undo_window_seconds: u64,
    #[serde(default = "default_toast_ttl")]
    pub toast_ttl_seconds: u64,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            undo_window_seconds: DEFAULT_UNDO_WINDOW_SECONDS,
            toast_ttl_seconds: DEFAULT_TOAST_TTL_SECONDS,
        }
    }
}

fn default_undo_window() -> u64 {
    DEFAULT_UNDO_WINDOW_SECONDS
}

fn default_toast_ttl() -> u64 {
    DEFAULT_TOAST_TTL_SECONDS
}

impl TravelogConfig {
    pub fn new(
        data_dir: PathBuf,
        default_view: ViewMode,
        undo_window_seconds: u64,
        toast_ttl_seconds: u64,
    ) -> Self {
        Self {
            storage: StorageSection {
                data_dir: Some(data_dir.to_string_lossy().to_string()),
            },
            ui: UiSection {
                default_view,
                undo_window_seconds,
                toast_ttl_seconds,
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<TravelogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &TravelogConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("travelog"));
        }
    }
    Ok(home_dir()?.join(".config").join("travelog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("travelog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("travelog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TravelogConfig = toml::from_str("").unwrap();
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.ui.default_view, ViewMode::List);
        assert_eq!(config.ui.undo_window_seconds, 4);
        assert_eq!(config.ui.toast_ttl_seconds, 5);
    }

    #[test]
    fn test_round_trip() {
        let config = TravelogConfig::new(PathBuf::from("/tmp/trips"), ViewMode::Map, 10, 2);
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("default_view = \"map\""));

        let parsed: TravelogConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.storage.data_dir.as_deref(), Some("/tmp/trips"));
        assert_eq!(parsed.ui.undo_window_seconds, 10);
    }
}
