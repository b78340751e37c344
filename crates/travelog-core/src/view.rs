//! Which presentation is active: the card list or the map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TravelogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Map,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::List => Self::Map,
            Self::Map => Self::List,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = TravelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "map" => Ok(Self::Map),
            other => Err(TravelogError::InvalidInput(format!(
                "Unknown view \"{}\" (expected list or map)",
                other
            ))),
        }
    }
}

/// Pure UI state; changing it never touches the entry store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewSelector {
    mode: ViewMode,
}

impl ViewSelector {
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Switch to the other view and return it.
    pub fn toggle(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}
